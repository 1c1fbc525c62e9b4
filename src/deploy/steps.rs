//! The individual deployment steps
//!
//! Every step takes the resolved target path and may be invoked on its
//! own; none depends on another step having run in the same invocation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::RuleBundle;
use crate::error::DeployResult;
use crate::gitignore;
use crate::writer::{atomic_write, hash_file};

use super::{DeployOptions, DeployReport};

/// README seeded into a target directory that this tool created itself.
/// Pre-existing targets are left alone.
pub const README_TEMPLATE: &str = r#"# Cursor Rules Project

This project carries a standard Cursor rules setup.

## Structure

- `.cursor/rules/` - Editor rule files (`*.mdc`). Local edits are
  preserved; re-deploying never overwrites an existing rule file.
- `docs/` - Shared reference documentation, kept in sync with the
  source bundle on every deploy.

Re-run the deployer at any time; it only fills in what is missing.
"#;

/// Step 1: ensure the target directory exists.
///
/// A newly created target is seeded with the default README. An existing
/// target is untouched, README included.
pub fn ensure_target(
    target: &Path,
    options: &DeployOptions,
    report: &mut DeployReport,
) -> DeployResult<()> {
    if target.is_dir() {
        return Ok(());
    }

    if !options.dry_run {
        fs::create_dir_all(target)?;
        atomic_write(&target.join("README.md"), README_TEMPLATE.as_bytes())?;
    }
    report.created.push(target.display().to_string());
    report.written.push("README.md".to_string());

    Ok(())
}

/// Step 2: ensure `<target>/.cursor/rules` exists.
pub fn ensure_rules_dir(
    target: &Path,
    options: &DeployOptions,
    report: &mut DeployReport,
) -> DeployResult<PathBuf> {
    let rules_dir = target.join(".cursor").join("rules");

    if !rules_dir.is_dir() {
        if !options.dry_run {
            fs::create_dir_all(&rules_dir)?;
        }
        report.created.push(".cursor/rules".to_string());
    }

    Ok(rules_dir)
}

/// Step 3: copy rule files into `<target>/.cursor/rules`.
///
/// A rule whose name already exists at the destination is skipped, not
/// overwritten. Local customizations survive every re-deploy.
pub fn copy_rules(
    bundle: &RuleBundle,
    target: &Path,
    options: &DeployOptions,
    report: &mut DeployReport,
) -> DeployResult<()> {
    let rules_dir = target.join(".cursor").join("rules");

    for rule in bundle.rule_files()? {
        let name = rule
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let dest = rules_dir.join(&name);
        let rel = format!(".cursor/rules/{}", name);

        if dest.exists() {
            report.skipped.push(rel);
        } else {
            if !options.dry_run {
                copy_if_absent(&rule, &dest)?;
            }
            report.written.push(rel);
        }
    }

    Ok(())
}

/// Copy `src` to `dest` unless `dest` already exists.
///
/// Returns whether a copy happened. Parent directories are created as
/// needed.
pub fn copy_if_absent(src: &Path, dest: &Path) -> DeployResult<bool> {
    if dest.exists() {
        return Ok(false);
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dest)?;
    Ok(true)
}

/// Step 4: mirror the bundle's docs tree into the target.
///
/// Unlike rules, docs are shared truth: destination files are overwritten
/// unconditionally. The tree lands in both `docs/` and `.ai/docs/`.
pub fn mirror_docs(
    bundle: &RuleBundle,
    target: &Path,
    options: &DeployOptions,
    report: &mut DeployReport,
) -> DeployResult<()> {
    let Some(src) = bundle.docs_dir() else {
        return Ok(());
    };

    for rel_root in ["docs", ".ai/docs"] {
        let dest_root = target.join(rel_root);
        if !dest_root.is_dir() {
            report.created.push(rel_root.to_string());
        }
        mirror_into(src, &dest_root, Path::new(rel_root), options, report)?;
    }

    Ok(())
}

fn mirror_into(
    src: &Path,
    dest: &Path,
    rel: &Path,
    options: &DeployOptions,
    report: &mut DeployReport,
) -> DeployResult<()> {
    if !options.dry_run {
        fs::create_dir_all(dest)?;
    }

    let mut entries: Vec<_> = fs::read_dir(src)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name();
        let src_path = entry.path();
        let dest_path = dest.join(&name);
        let rel_path = rel.join(&name);

        if src_path.is_dir() {
            mirror_into(&src_path, &dest_path, &rel_path, options, report)?;
            continue;
        }

        let rel_str = rel_path.display().to_string();
        if dest_path.is_file() && hash_file(&dest_path)? == hash_file(&src_path)? {
            report.unchanged.push(rel_str);
            continue;
        }

        if !options.dry_run {
            fs::copy(&src_path, &dest_path)?;
        }
        report.written.push(rel_str);
    }

    Ok(())
}

/// Step 5: ensure the target's `.gitignore` carries the marker entries.
pub fn ensure_gitignore(
    target: &Path,
    options: &DeployOptions,
    report: &mut DeployReport,
) -> DeployResult<()> {
    let path = target.join(".gitignore");

    if options.dry_run {
        let existing = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            String::new()
        };
        if gitignore::missing_markers(&existing).is_empty() {
            report.unchanged.push(".gitignore".to_string());
        } else {
            report.written.push(".gitignore".to_string());
        }
        return Ok(());
    }

    let appended = gitignore::ensure_markers(&path)?;
    if appended.is_empty() {
        report.unchanged.push(".gitignore".to_string());
    } else {
        report.written.push(".gitignore".to_string());
    }

    Ok(())
}
