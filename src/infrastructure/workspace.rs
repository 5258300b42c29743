//! Config-backed Workspace Locator
//!
//! Uses `apollo_path` when configured; otherwise detects the package root
//! from the current directory and caches it in the config file.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::ports::WorkspaceLocator;
use crate::error::{ApolloError, ApolloResult};

/// Files that mark a Python package root
const PACKAGE_MARKERS: &[&str] = &["pyproject.toml", "setup.py", "setup.cfg"];

#[derive(Debug, Clone)]
pub struct ConfigWorkspace {
    config_path: PathBuf,
    apollo_path: Option<PathBuf>,
    cwd: PathBuf,
}

impl ConfigWorkspace {
    pub fn new(config_path: impl Into<PathBuf>, config: &Config, cwd: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            apollo_path: config.apollo_path.clone(),
            cwd: cwd.into(),
        }
    }
}

impl WorkspaceLocator for ConfigWorkspace {
    fn resolve(&self) -> ApolloResult<PathBuf> {
        if let Some(configured) = &self.apollo_path {
            let path = if configured.is_absolute() {
                configured.clone()
            } else {
                self.cwd.join(configured)
            };
            if !path.is_dir() {
                return Err(ApolloError::InvalidWorkingPath { path });
            }
            tracing::debug!(path = %path.display(), "using configured apollo_path");
            return Ok(path);
        }

        let detected = find_package_root(&self.cwd).unwrap_or_else(|| self.cwd.clone());
        tracing::info!(
            path = %detected.display(),
            config = %self.config_path.display(),
            "caching detected apollo_path"
        );
        Config::save_apollo_path(&self.config_path, &detected)?;
        Ok(detected)
    }
}

/// Nearest ancestor of `start` (inclusive) containing a package marker.
pub fn find_package_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| PACKAGE_MARKERS.iter().any(|m| dir.join(m).is_file()))
        .map(Path::to_path_buf)
}
