//! Command Runner Port
//!
//! Executes a shell command line in a working directory. Failures are values,
//! not errors: the workflow branches on `CommandOutput::success`.

use std::path::{Path, PathBuf};

/// A shell command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Full command line, interpreted by the platform shell
    pub command: String,
    /// Working directory
    pub cwd: PathBuf,
    /// Extra environment for the child only
    pub env: Vec<(String, String)>,
    /// Human-readable status shown while running
    pub label: String,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        let command = command.into();
        Self {
            label: command.clone(),
            command,
            cwd: cwd.as_ref().to_path_buf(),
            env: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Outcome of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` when killed by a signal or never started
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Everything the command said, for error reports.
    ///
    /// Joins trimmed stdout and stderr; falls back to the exit status when the
    /// command printed nothing.
    pub fn error_detail(&self) -> String {
        let parts: Vec<&str> = [self.stdout.trim(), self.stderr.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        if !parts.is_empty() {
            return parts.join("\n");
        }

        match self.code {
            Some(code) => format!("command exited with status {}", code),
            None => "command terminated without an exit status".to_string(),
        }
    }
}

/// Trait for running shell commands.
///
/// Implementations:
/// - `ShellCommandRunner`: `sh -c` / `cmd /C` with a spinner
pub trait CommandRunner: Send + Sync {
    fn run(&self, spec: &CommandSpec) -> CommandOutput;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> CommandOutput {
        (**self).run(spec)
    }
}
