//! Test fixtures - reusable content constants for tests.

/// A simple rule file for basic testing
pub const BASE_RULE: &str = r#"---
description: Base project conventions
globs: "**/*"
---
# Base Conventions

Prefer small, focused modules.
"#;

/// A second rule file, for multi-rule bundles
pub const STYLE_RULE: &str = r#"---
description: Code style guidance
globs: "src/**"
---
# Style

Follow the existing formatting.
"#;

/// A locally customized rule, used to verify the non-overwrite policy
pub const CUSTOMIZED_RULE: &str = r#"# Customized locally

Do not lose this edit.
"#;

/// A docs page shipped with the bundle
pub const OVERVIEW_DOC: &str = "# Overview\n\nShared reference documentation.\n";
