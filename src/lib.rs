//! Apollo - package, validate and publish a Python distribution
//!
//! Apollo wraps the usual release chores of a Python project: it checks the
//! caller against a maintainer allow-list, makes sure `.pypirc` holds a token,
//! records release notes in `CHANGELOG.md`, rebuilds the distribution, runs
//! `twine check` and finally uploads to TestPyPI or PyPI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployError, DeployOptions, DeployOutcome, DeployUseCase};
pub use config::Config;
pub use domain::value_objects::{AllowList, BuildMode, DeployTarget};
pub use error::{ApolloError, ApolloResult};
