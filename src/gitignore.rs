//! Idempotent `.gitignore` marker management

use std::path::Path;

use crate::error::DeployResult;
use crate::writer::atomic_write;

/// Glob excluding privately-named rule files from version control
pub const PRIVATE_RULES_MARKER: &str = ".cursor/rules/_*.mdc";

/// Pattern excluding the generated docs mirror
pub const DOCS_MIRROR_MARKER: &str = ".ai/";

/// Marker entries with their leading comments, in append order
pub const MARKERS: &[(&str, &str)] = &[
    ("# Private Cursor rules", PRIVATE_RULES_MARKER),
    ("# Generated docs mirror", DOCS_MIRROR_MARKER),
];

/// Markers not yet present in the given `.gitignore` content.
///
/// Presence is a plain substring check, so a marker inside a larger
/// pattern also counts. That keeps repeat runs from stacking duplicates.
pub fn missing_markers(content: &str) -> Vec<(&'static str, &'static str)> {
    MARKERS
        .iter()
        .copied()
        .filter(|(_, marker)| !content.contains(marker))
        .collect()
}

/// Ensure the target's `.gitignore` carries every marker entry.
///
/// Creates the file when absent, appends only the missing markers when
/// present. Returns the markers that were appended (empty on a no-op).
pub fn ensure_markers(gitignore_path: &Path) -> DeployResult<Vec<&'static str>> {
    let existing = if gitignore_path.exists() {
        std::fs::read_to_string(gitignore_path)?
    } else {
        String::new()
    };

    let missing = missing_markers(&existing);
    if missing.is_empty() {
        return Ok(Vec::new());
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for (comment, marker) in &missing {
        content.push_str(comment);
        content.push('\n');
        content.push_str(marker);
        content.push('\n');
    }

    atomic_write(gitignore_path, content.as_bytes())?;
    Ok(missing.iter().map(|(_, marker)| *marker).collect())
}
