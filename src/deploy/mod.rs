//! Deployment engine
//!
//! Deployment is a fixed sequence of five steps, each independently
//! idempotent, so a run interrupted by a filesystem error leaves the
//! target valid and a re-run completes the remaining work:
//!
//! 1. Ensure the target directory exists (seed README on first creation)
//! 2. Ensure `<target>/.cursor/rules` exists
//! 3. Copy rule files, skipping names already present at the destination
//! 4. Mirror the bundle's docs tree (overwriting), including `.ai/docs`
//! 5. Ensure `.gitignore` carries the marker entries

pub mod steps;

use std::path::Path;

use serde::Serialize;

use crate::bundle::RuleBundle;
use crate::error::DeployResult;

/// Options for a deployment run
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployOptions {
    /// Report what would be done without writing
    pub dry_run: bool,
}

/// Result of a deployment run
///
/// Paths are relative to the target root, except `created` entries for
/// the target directory itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeployReport {
    /// Directories created
    pub created: Vec<String>,
    /// Files written (new or overwritten)
    pub written: Vec<String>,
    /// Rule files skipped because the destination already exists
    pub skipped: Vec<String>,
    /// Files already in the desired state
    pub unchanged: Vec<String>,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the run had nothing left to do
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.written.is_empty()
    }
}

/// Run the full deployment sequence against a target directory.
pub fn run(
    bundle: &RuleBundle,
    target: &Path,
    options: &DeployOptions,
) -> DeployResult<DeployReport> {
    let mut report = DeployReport::new();

    steps::ensure_target(target, options, &mut report)?;
    steps::ensure_rules_dir(target, options, &mut report)?;
    steps::copy_rules(bundle, target, options, &mut report)?;
    steps::mirror_docs(bundle, target, options, &mut report)?;
    steps::ensure_gitignore(target, options, &mut report)?;

    Ok(report)
}
