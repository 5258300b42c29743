//! Error types for Apollo
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Apollo operations
pub type ApolloResult<T> = Result<T, ApolloError>;

/// Errors raised by configuration, credential and filesystem adapters
#[derive(Error, Debug)]
pub enum ApolloError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config could not be serialized back to disk
    #[error("failed to write config {file}: {message}")]
    ConfigWrite { file: PathBuf, message: String },

    /// Configured working path does not exist or is not a directory
    #[error("apollo_path '{path}' is not a directory")]
    InvalidWorkingPath { path: PathBuf },

    /// No config or home directory could be determined
    #[error("could not determine {what} directory")]
    MissingDirectory { what: &'static str },

    /// Credentials file is malformed
    #[error("invalid credentials file {file}: {message}")]
    InvalidCredentials { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
