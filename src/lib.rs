//! Rulekit - Cursor rules and docs deployment tool
//!
//! Rulekit ships a bundle of markdown rule files (`*.mdc`) plus a shared
//! docs tree and deploys them into a target project. Rule files are never
//! overwritten once deployed; docs are mirrored as shared truth on every
//! run. The whole sequence is idempotent and safe to re-run.

pub mod bundle;
pub mod deploy;
pub mod error;
pub mod gitignore;
pub mod ui;
pub mod writer;

// Re-exports for convenience
pub use bundle::{RuleBundle, RULE_EXTENSION};
pub use deploy::{DeployOptions, DeployReport};
pub use error::{DeployError, DeployResult};
