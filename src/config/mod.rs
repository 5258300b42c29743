//! Configuration module for Apollo
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APOLLO_*, PYPIRC)
//! 3. User config (`$XDG_CONFIG_HOME/apollo/config.toml` or `APOLLO_CONFIG`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, ConfigWarning};
pub use types::{
    AnimationMode, ColorMode, CommandsConfig, Config, CredentialsConfig, DeployConfig,
    OutputConfig, DEFAULT_BUILD_COMMAND, DEFAULT_CHECK_COMMAND, DEFAULT_CLEAN_COMMAND,
    DEFAULT_UPLOAD_COMMAND,
};
