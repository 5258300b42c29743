//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `prompt/` - Terminal and line-based prompters
//! - `process/` - Shell command runner with spinner
//! - `credentials/` - `.pypirc` credential store
//! - `events/` - Console and NDJSON event sinks
//! - `workspace` - Working directory detection and caching
//! - `identity` - Invoking user lookup

pub mod credentials;
pub mod events;
pub mod identity;
pub mod process;
pub mod prompt;
pub mod workspace;

// Re-export for convenience
pub use credentials::PypircStore;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use identity::current_username;
pub use process::ShellCommandRunner;
pub use prompt::{LinePrompter, TerminalPrompter};
pub use workspace::ConfigWorkspace;
