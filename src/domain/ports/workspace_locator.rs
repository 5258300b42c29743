//! Workspace Locator Port
//!
//! Resolves (and caches) the working directory builds run in.

use std::path::PathBuf;

use crate::error::ApolloResult;

pub trait WorkspaceLocator: Send + Sync {
    /// Return the package working directory, persisting it when it had to be
    /// discovered.
    fn resolve(&self) -> ApolloResult<PathBuf>;
}

/// Locator that always answers with a fixed directory.
#[derive(Debug, Clone)]
pub struct FixedWorkspace(pub PathBuf);

impl WorkspaceLocator for FixedWorkspace {
    fn resolve(&self) -> ApolloResult<PathBuf> {
        Ok(self.0.clone())
    }
}
