//! Deploy Module
//!
//! Orchestrates the publish flow for Apollo.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployOutcome`, `DeployError`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use apollo::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(prompter, runner, credentials, workspace);
//! let outcome = use_case.execute(&DeployOptions::new(target, username))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployError, DeployOutcome, SanityCheck};
pub use use_case::{DeployUseCase, CONFIRM_PROMPT_PREFIX, NOTES_PROMPT, SANITY_LOG_FILE};
