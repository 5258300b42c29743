//! Test environment builder for isolated Apollo runs.
//!
//! Provides `TestEnv` - a temporary Python package and a temporary home,
//! plus helpers to run the `apollo` binary with scripted stdin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use super::fixtures::{shell_config, MAINTAINER};
use super::windows::WindowsCompatExt;

/// Result of running the Apollo CLI
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

/// Isolated package and home directory.
pub struct TestEnv {
    /// Package root (contains `pyproject.toml`), also the invocation directory
    pub package_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    user: String,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn package_path(&self, relative: &str) -> PathBuf {
        self.package_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.home_path(".config/apollo/config.toml")
    }

    pub fn read_package_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.package_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write_package_file(&self, relative: &str, content: &str) {
        std::fs::write(self.package_path(relative), content).expect("Failed to write file");
    }

    /// Run apollo from the package root, feeding `stdin` to its prompts.
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_from(self.package_root.path(), args, stdin)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], stdin: &str) -> TestResult {
        let mut child = Command::new(env!("CARGO_BIN_EXE_apollo"))
            .current_dir(cwd)
            .args(args)
            .with_test_home(self.home_dir.path())
            .env("LOGNAME", &self.user)
            .env("USER", &self.user)
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to execute apollo");

        // The child may exit before reading everything (e.g. unauthorized)
        if let Some(mut input) = child.stdin.take() {
            let _ = input.write_all(stdin.as_bytes());
        }

        let output = child.wait_with_output().expect("Failed to wait on apollo");
        output_to_result(output)
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
    user: String,
    config: Option<String>,
    pypirc: Option<String>,
    changelog: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            user: MAINTAINER.to_string(),
            config: Some(shell_config("true")),
            pypirc: None,
            changelog: None,
        }
    }

    /// Login name the child process sees
    pub fn with_user(mut self, user: &str) -> Self {
        self.user = user.to_string();
        self
    }

    /// Replace the generated config file content
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn with_pypirc(mut self, content: &str) -> Self {
        self.pypirc = Some(content.to_string());
        self
    }

    pub fn with_changelog(mut self, content: &str) -> Self {
        self.changelog = Some(content.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let package_root = TempDir::new().expect("Failed to create package temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        std::fs::write(
            package_root.path().join("pyproject.toml"),
            "[project]\nname = \"demo\"\nversion = \"0.1.0\"\n",
        )
        .expect("Failed to write pyproject.toml");

        if let Some(config) = &self.config {
            let config_path = home_dir.path().join(".config/apollo/config.toml");
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create config directory");
            }
            std::fs::write(&config_path, config).expect("Failed to write config");
        }

        if let Some(pypirc) = &self.pypirc {
            std::fs::write(home_dir.path().join(".pypirc"), pypirc)
                .expect("Failed to write .pypirc");
        }

        if let Some(changelog) = &self.changelog {
            std::fs::write(package_root.path().join("CHANGELOG.md"), changelog)
                .expect("Failed to write CHANGELOG.md");
        }

        TestEnv {
            package_root,
            home_dir,
            user: self.user,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
