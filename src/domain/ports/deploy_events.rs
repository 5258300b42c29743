//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables terminal status output, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{BuildMode, DeployTarget};

/// A subprocess phase of the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Clean,
    Build,
    Check,
    Upload,
}

impl DeployStep {
    pub fn name(&self) -> &'static str {
        match self {
            DeployStep::Clean => "clean",
            DeployStep::Build => "build",
            DeployStep::Check => "check",
            DeployStep::Upload => "upload",
        }
    }

    /// Status label shown while the step runs
    pub fn label(&self, target: DeployTarget) -> String {
        match self {
            DeployStep::Clean => "Cleaning previous build artifacts...".to_string(),
            DeployStep::Build => "Building the package...".to_string(),
            DeployStep::Check => "Performing sanity check on the build artifacts...".to_string(),
            DeployStep::Upload => format!("Pushing package to {}...", target.repository()),
        }
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Invoking user is not on the allow-list
    Unauthorized { user: String },

    /// Credentials file was created or extended
    CredentialsCreated { path: PathBuf },

    /// Credentials could not be ensured
    CredentialsFailed { message: String },

    /// Working directory resolved
    WorkspaceResolved { path: PathBuf },

    /// User declined the confirmation prompt
    Aborted { target: DeployTarget },

    /// `CHANGELOG.md` did not exist and was created
    ChangelogCreated { path: PathBuf },

    /// Release notes appended
    NotesAppended { path: PathBuf },

    /// Build mode that clean/build commands receive
    BuildModeSelected { mode: BuildMode },

    /// Subprocess step started
    StepStarted { step: DeployStep, command: String },

    /// Subprocess step finished successfully
    StepSucceeded { step: DeployStep },

    /// Clean, build or upload failed
    StepFailed { step: DeployStep, detail: String },

    /// Sanity check passed
    SanityPassed,

    /// Sanity check failed; detail saved to `log_path`
    SanityFailed { log_path: PathBuf, detail: String },

    /// Sanity check skipped by flag
    SanitySkipped,

    /// Upload completed
    Completed { target: DeployTarget },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: status lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
