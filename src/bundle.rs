//! Rule bundle discovery
//!
//! A bundle is a directory shipped alongside the binary containing:
//! - `rules/` - flat set of `*.mdc` rule files (required)
//! - `docs/` - shared documentation tree (optional)
//!
//! The bundle is an immutable input; deployment only ever reads from it.

use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

/// File extension of rule files inside `rules/`
pub const RULE_EXTENSION: &str = "mdc";

/// A validated bundle layout
#[derive(Debug, Clone)]
pub struct RuleBundle {
    root: PathBuf,
    rules_dir: PathBuf,
    docs_dir: Option<PathBuf>,
}

impl RuleBundle {
    /// Validate a bundle root and record its layout.
    ///
    /// Errors if the root doesn't exist or lacks a `rules/` subdirectory.
    /// A missing `docs/` is fine; the docs step becomes a no-op.
    pub fn discover(root: &Path) -> DeployResult<Self> {
        if !root.is_dir() {
            return Err(DeployError::BundleNotFound {
                path: root.to_path_buf(),
            });
        }

        let rules_dir = root.join("rules");
        if !rules_dir.is_dir() {
            return Err(DeployError::RulesDirMissing {
                path: rules_dir.clone(),
            });
        }

        let docs_dir = root.join("docs");
        let docs_dir = docs_dir.is_dir().then_some(docs_dir);

        Ok(Self {
            root: root.to_path_buf(),
            rules_dir,
            docs_dir,
        })
    }

    /// Default bundle root: the directory containing the running executable.
    ///
    /// Falls back to the current directory when the executable path can't
    /// be resolved (some container setups).
    pub fn default_root() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn docs_dir(&self) -> Option<&Path> {
        self.docs_dir.as_deref()
    }

    /// List rule files in deployment order.
    ///
    /// Only plain files directly inside `rules/` with the rule extension
    /// count; subdirectories and other extensions are ignored. Sorted by
    /// file name so repeat runs process rules in a stable order.
    pub fn rule_files(&self) -> DeployResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(&self.rules_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == RULE_EXTENSION) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}
