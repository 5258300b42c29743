//! Build mode value object - exported to build commands as `ENV`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment the package is built for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// `ENV=prod`
    #[default]
    #[value(name = "prod")]
    #[serde(rename = "prod")]
    Production,
    /// `ENV=dev`
    #[value(name = "dev")]
    #[serde(rename = "dev")]
    Development,
}

impl BuildMode {
    /// Name of the variable set on build subprocesses
    pub const ENV_VAR: &'static str = "ENV";

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Production => "prod",
            BuildMode::Development => "dev",
        }
    }

    /// `(name, value)` pair for a child process environment
    pub fn env_pair(&self) -> (String, String) {
        (Self::ENV_VAR.to_string(), self.as_str().to_string())
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
