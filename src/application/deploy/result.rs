//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::DeployTarget;
use crate::error::ApolloError;

/// How the sanity check phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanityCheck {
    Passed,
    Skipped,
}

/// Result of a successful deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Index the package was pushed to
    pub target: DeployTarget,
    /// Resolved working directory
    pub working_dir: PathBuf,
    /// Release notes were appended to the changelog
    pub notes_recorded: bool,
    pub sanity_check: SanityCheck,
    /// Command lines run, in order
    pub commands: Vec<String>,
}

/// Why a deploy stopped.
///
/// Each category maps to its own process exit code.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("unauthorized user: {user}")]
    Unauthorized { user: String },

    #[error("deployment aborted")]
    Aborted,

    #[error("credentials error: {0}")]
    Credentials(String),

    #[error(transparent)]
    Config(#[from] ApolloError),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("failed to write {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("build failed: {0}")]
    Build(String),

    #[error("sanity check failed, details in {log_path}")]
    Validation { log_path: PathBuf, detail: String },

    #[error("upload failed: {0}")]
    Upload(String),
}

impl DeployError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::Unauthorized { .. } => 1,
            DeployError::Aborted => 3,
            DeployError::Credentials(_)
            | DeployError::Config(_)
            | DeployError::Prompt(_)
            | DeployError::File { .. } => 4,
            DeployError::Build(_) => 5,
            DeployError::Validation { .. } => 6,
            DeployError::Upload(_) => 7,
        }
    }
}
