//! Credential Store Port
//!
//! Makes sure upload credentials exist for the chosen index before anything
//! is built.

use std::path::PathBuf;

use thiserror::Error;

use super::prompter::{PromptError, Prompter};
use crate::domain::value_objects::DeployTarget;

/// What `ensure` had to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// Valid credentials were already on disk
    Present { path: PathBuf },
    /// Credentials were collected and written
    Created { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("no API token provided for {repository}")]
    EmptyToken { repository: String },

    #[error("could not read token: {0}")]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Store(#[from] crate::error::ApolloError),
}

/// Trait for upload credential bootstrapping.
pub trait CredentialStore: Send + Sync {
    /// Ensure credentials for `target` exist, asking through `prompter` when
    /// they do not.
    fn ensure(
        &self,
        target: DeployTarget,
        prompter: &dyn Prompter,
    ) -> Result<CredentialStatus, CredentialError>;
}
