//! Console Event Sink
//!
//! Turns deploy events into status lines on stderr.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink, DeployStep};
use crate::domain::value_objects::DeployTarget;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Event sink that prints human-readable status lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    target: DeployTarget,
    color: bool,
    unicode: bool,
    /// The runner draws a spinner while steps run; without it, announce them
    announce_steps: bool,
}

impl ConsoleEventSink {
    pub fn stderr(ui: &UiContext, target: DeployTarget) -> Self {
        Self::with_writer(io::stderr(), ui, target)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        ui: &UiContext,
        target: DeployTarget,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            target,
            color: ui.color,
            unicode: ui.unicode,
            announce_steps: !ui.animation,
        }
    }

    fn line(&self, icon: Icon, message: &str) -> String {
        format!("{} {}", icon.colored(self.color, self.unicode), message)
    }

    fn render(&self, event: DeployEvent) -> Vec<String> {
        match event {
            DeployEvent::Unauthorized { user } => vec![
                self.line(Icon::Error, &format!("Unauthorized user: {}.", user)),
                self.line(Icon::Info, "Only maintainers can deploy this package."),
            ],
            DeployEvent::CredentialsCreated { path } => vec![self.line(
                Icon::Success,
                &format!("Saved {} credentials to {}.", self.target, path.display()),
            )],
            DeployEvent::CredentialsFailed { message } => {
                vec![self.line(Icon::Error, &format!("Credentials error: {}", message))]
            }
            DeployEvent::WorkspaceResolved { path } => {
                let dim = ColoredText::dim(path.display().to_string()).render(self.color);
                vec![self.line(Icon::Info, &format!("Working directory: {}", dim))]
            }
            DeployEvent::Aborted { .. } => vec![self.line(Icon::Error, "Deployment aborted.")],
            DeployEvent::ChangelogCreated { path } => {
                vec![self.line(Icon::Success, &format!("Created {}.", file_name(&path)))]
            }
            DeployEvent::NotesAppended { path } => vec![self.line(
                Icon::Info,
                &format!("Release notes appended to {}.", file_name(&path)),
            )],
            DeployEvent::BuildModeSelected { mode } => vec![self.line(
                Icon::Info,
                &format!("Build mode '{}' passed to build commands as ENV.", mode),
            )],
            DeployEvent::StepStarted { step, .. } if self.announce_steps => {
                vec![self.line(Icon::Progress, &step.label(self.target))]
            }
            DeployEvent::StepStarted { .. } => Vec::new(),
            DeployEvent::StepSucceeded { step } => match step {
                DeployStep::Clean => {
                    vec![self.line(Icon::Success, "Previous build artifacts removed.")]
                }
                DeployStep::Build => vec![self.line(Icon::Success, "Package built.")],
                // Reported by SanityPassed / Completed
                DeployStep::Check | DeployStep::Upload => Vec::new(),
            },
            DeployEvent::StepFailed { step, detail } => {
                let message = match step {
                    DeployStep::Upload => format!("Deployment failed: {}", detail),
                    _ => format!("Build failed: {}", detail),
                };
                vec![self.line(Icon::Error, &message)]
            }
            DeployEvent::SanityPassed => vec![self.line(
                Icon::Success,
                "Sanity check passed. No build issues detected.",
            )],
            DeployEvent::SanityFailed { log_path, detail } => vec![
                self.line(Icon::Error, "Sanity check failed. Build contains errors."),
                self.line(
                    Icon::Info,
                    &format!("Error details saved to: {}", log_path.display()),
                ),
                format!("\nSanity Check Errors:\n{}", detail),
            ],
            DeployEvent::SanitySkipped => vec![self.line(Icon::Warning, "Sanity check skipped.")],
            DeployEvent::Completed { target } => vec![self.line(
                Icon::Success,
                &format!("Package successfully pushed to {}!", target),
            )],
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let lines = self.render(event);
        if lines.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
