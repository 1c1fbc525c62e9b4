//! Atomic file writer and content hashing
//!
//! Whole-file writes (`README.md`, `.gitignore`) go through tempfile +
//! rename so a crash mid-write never leaves a truncated file behind.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::DeployResult;

/// Write content to a file atomically
///
/// The temporary file is created in the destination's parent directory so
/// the final rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> DeployResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compute SHA-256 hash of in-memory content
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Compute SHA-256 hash of a file
pub fn hash_file(path: &Path) -> DeployResult<String> {
    let content = std::fs::read(path)?;
    Ok(hash_content(&content))
}
