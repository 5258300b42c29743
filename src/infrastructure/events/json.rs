//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = crate::ui::json::write_event(&mut *writer, &event);
        }
    }
}

fn to_json(event: DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Unauthorized { user } => serde_json::json!({
            "event": "unauthorized",
            "command": "deploy",
            "user": user,
        }),

        DeployEvent::CredentialsCreated { path } => serde_json::json!({
            "event": "credentials_created",
            "command": "deploy",
            "path": path.display().to_string(),
        }),

        DeployEvent::CredentialsFailed { message } => serde_json::json!({
            "event": "credentials_failed",
            "command": "deploy",
            "message": message,
        }),

        DeployEvent::WorkspaceResolved { path } => serde_json::json!({
            "event": "workspace",
            "command": "deploy",
            "path": path.display().to_string(),
        }),

        DeployEvent::Aborted { target } => serde_json::json!({
            "event": "aborted",
            "command": "deploy",
            "repository": target.repository(),
        }),

        DeployEvent::ChangelogCreated { path } => serde_json::json!({
            "event": "changelog_created",
            "command": "deploy",
            "path": path.display().to_string(),
        }),

        DeployEvent::NotesAppended { path } => serde_json::json!({
            "event": "notes_appended",
            "command": "deploy",
            "path": path.display().to_string(),
        }),

        DeployEvent::BuildModeSelected { mode } => serde_json::json!({
            "event": "build_mode",
            "command": "deploy",
            "mode": mode.as_str(),
        }),

        DeployEvent::StepStarted { step, command } => serde_json::json!({
            "event": "step_start",
            "command": "deploy",
            "step": step.name(),
            "shell": command,
        }),

        DeployEvent::StepSucceeded { step } => serde_json::json!({
            "event": "step_done",
            "command": "deploy",
            "step": step.name(),
        }),

        DeployEvent::StepFailed { step, detail } => serde_json::json!({
            "event": "step_failed",
            "command": "deploy",
            "step": step.name(),
            "detail": detail,
        }),

        DeployEvent::SanityPassed => serde_json::json!({
            "event": "sanity_check",
            "command": "deploy",
            "status": "passed",
        }),

        DeployEvent::SanityFailed { log_path, detail } => serde_json::json!({
            "event": "sanity_check",
            "command": "deploy",
            "status": "failed",
            "log_path": log_path.display().to_string(),
            "detail": detail,
        }),

        DeployEvent::SanitySkipped => serde_json::json!({
            "event": "sanity_check",
            "command": "deploy",
            "status": "skipped",
        }),

        DeployEvent::Completed { target } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "repository": target.repository(),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(to_json(event));
    }
}
