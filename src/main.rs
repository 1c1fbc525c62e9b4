//! Rulekit CLI - Cursor rules and docs deployment tool
//!
//! Usage: rulekit <TARGET> [OPTIONS]
//!
//! Deploys the rule bundle shipped alongside the binary into a target
//! project directory: `.cursor/rules/*.mdc` (non-overwriting), `docs/`
//! and `.ai/docs/` (mirrored), and `.gitignore` marker entries.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rulekit::bundle::RuleBundle;
use rulekit::deploy::{self, DeployOptions, DeployReport};
use rulekit::ui::{detect_capabilities, ColorWhen, Icon};

/// Rulekit - deploy Cursor rule files and shared docs into a project
#[derive(Parser, Debug)]
#[command(name = "rulekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target project directory (created if missing)
    target: PathBuf,

    /// Bundle directory holding rules/ and docs/ (default: next to the binary)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Dry run - show what would be done
    #[arg(long)]
    dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    json: bool,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,
}

fn main() -> Result<()> {
    // Missing or bad arguments exit 1, not clap's default 2. Help and
    // version requests still exit 0.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        use clap::error::ErrorKind;
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
            _ => std::process::exit(1),
        }
    });

    cmd_deploy(&cli)
}

fn cmd_deploy(cli: &Cli) -> Result<()> {
    let caps = detect_capabilities();
    let color = cli.color.resolve(&caps);
    let unicode = caps.supports_unicode;

    let bundle_root = cli.source.clone().unwrap_or_else(RuleBundle::default_root);
    let bundle = RuleBundle::discover(&bundle_root)?;

    if !cli.json {
        println!(
            "{} Rulekit Deploy",
            Icon::Deploy.colored(color, unicode)
        );
        println!("Source: {}", bundle.root().display());
        println!("Target: {}", cli.target.display());
        if cli.dry_run {
            println!("Mode: Dry run");
        }
    }

    let options = DeployOptions {
        dry_run: cli.dry_run,
    };
    let report = deploy::run(&bundle, &cli.target, &options)?;

    if cli.json {
        let output = serde_json::json!({
            "event": "deploy",
            "status": "success",
            "dry_run": cli.dry_run,
            "report": report,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        print_report(&report, cli.dry_run, color, unicode);
    }

    Ok(())
}

fn print_report(report: &DeployReport, dry_run: bool, color: bool, unicode: bool) {
    let success = Icon::Success.colored(color, unicode);
    let warning = Icon::Warning.colored(color, unicode);
    let pending = Icon::Pending.colored(color, unicode);

    println!();
    if dry_run {
        println!("Planned changes:");
    } else {
        println!("Deploy Results:");
    }

    if !report.created.is_empty() {
        println!("  {} Created: {} directories", success, report.created.len());
        for path in &report.created {
            println!("    - {}", path);
        }
    }
    if !report.written.is_empty() {
        println!("  {} Written: {} files", success, report.written.len());
        for path in &report.written {
            println!("    - {}", path);
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "  {} Skipped: {} files (already present)",
            warning,
            report.skipped.len()
        );
        for path in &report.skipped {
            println!("    - {}", path);
        }
    }
    if !report.unchanged.is_empty() {
        println!("  {} Unchanged: {} files", pending, report.unchanged.len());
    }
    if report.is_noop() {
        println!("  Nothing to do; target is up to date.");
    }
    println!();
}
