//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod credential_store;
pub mod deploy_events;
pub mod prompter;
pub mod workspace_locator;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use credential_store::{CredentialError, CredentialStatus, CredentialStore};
pub use deploy_events::{DeployEvent, DeployEventSink, DeployStep, NoopEventSink};
pub use prompter::{PromptError, Prompter, ScriptedPrompter};
pub use workspace_locator::{FixedWorkspace, WorkspaceLocator};
