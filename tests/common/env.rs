//! Test environment builder for isolated rulekit testing.
//!
//! Provides `TestEnv` - an isolated environment with temp directories for
//! the source bundle and the deploy target, plus helpers to run the
//! rulekit CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a rulekit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - An isolated bundle directory (`rules/` plus optional `docs/`)
/// - An isolated work directory holding the deploy target
/// - CLI command execution helpers
pub struct TestEnv {
    /// Temporary directory holding the source bundle
    pub bundle_dir: TempDir,
    /// Temporary directory holding the deploy target
    pub work_dir: TempDir,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// The default target directory inside the work dir (may not exist yet)
    pub fn target(&self) -> PathBuf {
        self.work_dir.path().join("project")
    }

    /// Get path relative to the target directory
    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target().join(relative)
    }

    /// Run rulekit against the default target with extra args
    pub fn deploy(&self, extra_args: &[&str]) -> TestResult {
        let target = self.target().display().to_string();
        let source = self.bundle_dir.path().display().to_string();
        let mut args = vec![target.as_str(), "--source", source.as_str()];
        args.extend_from_slice(extra_args);
        self.run(&args)
    }

    /// Run rulekit with raw args from the work directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_rulekit");
        let output = Command::new(bin)
            .current_dir(self.work_dir.path())
            .args(args)
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to execute rulekit");

        output_to_result(output)
    }

    /// Read a deployed file's content
    pub fn read_target_file(&self, relative_path: &str) -> String {
        let full_path = self.target_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read deployed file {}: {}", relative_path, e))
    }

    /// Write a file under the target directory
    pub fn write_target_file(&self, relative_path: &str, content: &str) {
        let full_path = self.target_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    rules: Vec<(String, String)>,
    docs: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            docs: Vec::new(),
        }
    }

    /// Add a rule file to the bundle's rules/ directory
    pub fn with_rule(mut self, name: &str, content: &str) -> Self {
        self.rules.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a file to the bundle's docs/ tree
    pub fn with_doc(mut self, relative_path: &str, content: &str) -> Self {
        self.docs
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let bundle_dir = TempDir::new().expect("Failed to create bundle temp dir");
        let work_dir = TempDir::new().expect("Failed to create work temp dir");

        std::fs::create_dir_all(bundle_dir.path().join("rules"))
            .expect("Failed to create rules dir");

        for (name, content) in &self.rules {
            let path = bundle_dir.path().join("rules").join(name);
            std::fs::write(&path, content).expect("Failed to write rule file");
        }

        for (relative, content) in &self.docs {
            let path = bundle_dir.path().join("docs").join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create docs subdirectory");
            }
            std::fs::write(&path, content).expect("Failed to write doc file");
        }

        TestEnv {
            bundle_dir,
            work_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                for sub in list_all_files(&path) {
                    files.push(sub);
                }
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}
