//! Error types for rulekit
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rulekit operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for rulekit operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bundle root does not exist or is not a directory
    #[error("bundle directory not found: {path}")]
    BundleNotFound { path: PathBuf },

    /// Bundle exists but has no rules/ subdirectory
    #[error("no rules directory in bundle: {path} - expected a 'rules' subdirectory")]
    RulesDirMissing { path: PathBuf },
}
