//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ApolloResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_CLEAN_COMMAND: &str = "rm -rf dist/ build/ *.egg-info";
pub const DEFAULT_BUILD_COMMAND: &str = "python3 -m build";
pub const DEFAULT_CHECK_COMMAND: &str = "twine check dist/*";
pub const DEFAULT_UPLOAD_COMMAND: &str =
    "python3 -m twine upload --repository {repository} dist/*";

/// Deploy policy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Users allowed to publish (maintainers)
    #[serde(default)]
    pub allowed_users: Vec<String>,
}

/// Shell commands run by the deploy workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    #[serde(default = "default_clean")]
    pub clean: String,

    #[serde(default = "default_build")]
    pub build: String,

    #[serde(default = "default_check")]
    pub check: String,

    /// Upload template; `{repository}` is replaced by the index name
    #[serde(default = "default_upload")]
    pub upload: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            clean: default_clean(),
            build: default_build(),
            check: default_check(),
            upload: default_upload(),
        }
    }
}

fn default_clean() -> String {
    DEFAULT_CLEAN_COMMAND.to_string()
}

fn default_build() -> String {
    DEFAULT_BUILD_COMMAND.to_string()
}

fn default_check() -> String {
    DEFAULT_CHECK_COMMAND.to_string()
}

fn default_upload() -> String {
    DEFAULT_UPLOAD_COMMAND.to_string()
}

/// Credentials file configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// Explicit `.pypirc` location (defaults to `~/.pypirc`)
    #[serde(default)]
    pub pypirc_path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Working directory of the package to publish
    #[serde(default)]
    pub apollo_path: Option<PathBuf>,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub commands: CommandsConfig,

    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ApolloResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ApolloResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the config file if it exists, defaults otherwise, then apply env overrides
    pub fn load_or_default(path: &Path) -> ApolloResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (APOLLO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Persist `apollo_path` into the config file, preserving other content
    pub fn save_apollo_path(config_path: &Path, apollo_path: &Path) -> ApolloResult<()> {
        loader::save_apollo_path(config_path, apollo_path)
    }
}
