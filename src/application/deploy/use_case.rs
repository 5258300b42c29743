//! Deploy Use Case
//!
//! Orchestrates the publish flow:
//! 1. Authorize the invoking user against the allow-list
//! 2. Ensure upload credentials for the chosen index
//! 3. Resolve the package working directory
//! 4. Confirm the deploy and capture release notes
//! 5. Clean and build with the selected build mode
//! 6. Run the sanity check (unless skipped)
//! 7. Upload
//!
//! Every phase after authorization stops the flow on failure. Nothing that
//! already happened is rolled back.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::{
    CommandOutput, CommandRunner, CommandSpec, CredentialStatus, CredentialStore, DeployEvent,
    DeployEventSink, DeployStep, NoopEventSink, Prompter, WorkspaceLocator,
};
use crate::domain::services::{format_section, ReleaseNotes, CHANGELOG_FILE, CHANGELOG_HEADER};

use super::options::DeployOptions;
use super::result::{DeployError, DeployOutcome, SanityCheck};

/// Error log written next to the package when the sanity check fails
pub const SANITY_LOG_FILE: &str = "sanity_check_errors.log";

pub const CONFIRM_PROMPT_PREFIX: &str = "Are you sure you want to deploy to";

pub const NOTES_PROMPT: &str =
    "Enter release notes or changelog for this version (leave blank to skip):";

/// Deploy use case - orchestrates the publish flow
///
/// This use case is parameterized by its dependencies (ports),
/// allowing for easy testing and different implementations.
pub struct DeployUseCase<P, R, C, W>
where
    P: Prompter,
    R: CommandRunner,
    C: CredentialStore,
    W: WorkspaceLocator,
{
    prompter: P,
    runner: R,
    credentials: C,
    workspace: W,
}

impl<P, R, C, W> DeployUseCase<P, R, C, W>
where
    P: Prompter,
    R: CommandRunner,
    C: CredentialStore,
    W: WorkspaceLocator,
{
    pub fn new(prompter: P, runner: R, credentials: C, workspace: W) -> Self {
        Self {
            prompter,
            runner,
            credentials,
            workspace,
        }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> Result<DeployOutcome, DeployError> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        events: Arc<dyn DeployEventSink>,
    ) -> Result<DeployOutcome, DeployError> {
        let target = options.target;

        // Step 1: Authorization, before any side effect
        if !options.allow_list.permits(&options.username) {
            tracing::debug!(user = %options.username, "user not on allow-list");
            events.on_event(DeployEvent::Unauthorized {
                user: options.username.clone(),
            });
            return Err(DeployError::Unauthorized {
                user: options.username.clone(),
            });
        }
        tracing::debug!(user = %options.username, "user authorized");

        // Step 2: Credentials
        match self.credentials.ensure(target, &self.prompter) {
            Ok(CredentialStatus::Created { path }) => {
                events.on_event(DeployEvent::CredentialsCreated { path });
            }
            Ok(CredentialStatus::Present { path }) => {
                tracing::debug!(path = %path.display(), "credentials present");
            }
            Err(e) => {
                events.on_event(DeployEvent::CredentialsFailed {
                    message: e.to_string(),
                });
                return Err(DeployError::Credentials(e.to_string()));
            }
        }

        // Step 3: Working directory
        let working_dir = self.workspace.resolve()?;
        events.on_event(DeployEvent::WorkspaceResolved {
            path: working_dir.clone(),
        });

        // Step 4: Confirmation
        let question = format!("{} {}?", CONFIRM_PROMPT_PREFIX, target.repository());
        let confirmed = match self.prompter.confirm(&question, false) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!(error = %e, "confirmation prompt produced no answer");
                false
            }
        };
        if !confirmed {
            events.on_event(DeployEvent::Aborted { target });
            return Err(DeployError::Aborted);
        }

        // Step 5: Release notes
        let notes_input = self
            .prompter
            .text(NOTES_PROMPT)
            .map_err(|e| DeployError::Prompt(e.to_string()))?;
        let notes_recorded = match ReleaseNotes::parse(&notes_input) {
            Some(notes) => {
                self.record_release_notes(options, &notes, events.as_ref())?;
                true
            }
            None => false,
        };

        // Step 6: Build mode travels with the build commands only
        events.on_event(DeployEvent::BuildModeSelected {
            mode: options.build_mode,
        });
        let (env_key, env_value) = options.build_mode.env_pair();

        // Step 7: Clean + build
        let mut executed = Vec::new();
        for (step, command) in [
            (DeployStep::Clean, &options.commands.clean),
            (DeployStep::Build, &options.commands.build),
        ] {
            let spec = CommandSpec::new(command.as_str(), &working_dir)
                .with_label(step.label(target))
                .with_env(env_key.as_str(), env_value.as_str());
            let output = self.run_step(step, &spec, events.as_ref(), &mut executed);
            if !output.success {
                let detail = output.error_detail();
                events.on_event(DeployEvent::StepFailed {
                    step,
                    detail: detail.clone(),
                });
                return Err(DeployError::Build(detail));
            }
        }

        // Step 8: Sanity check
        let sanity_check = if options.skip_sanity_check {
            events.on_event(DeployEvent::SanitySkipped);
            SanityCheck::Skipped
        } else {
            self.sanity_check(options, &working_dir, events.as_ref(), &mut executed)?;
            SanityCheck::Passed
        };

        // Step 9: Upload
        let spec = CommandSpec::new(options.upload_command(), &working_dir)
            .with_label(DeployStep::Upload.label(target));
        let output = self.run_step(DeployStep::Upload, &spec, events.as_ref(), &mut executed);
        if !output.success {
            let detail = output.error_detail();
            events.on_event(DeployEvent::StepFailed {
                step: DeployStep::Upload,
                detail: detail.clone(),
            });
            return Err(DeployError::Upload(detail));
        }

        events.on_event(DeployEvent::Completed { target });

        Ok(DeployOutcome {
            target,
            working_dir,
            notes_recorded,
            sanity_check,
            commands: executed,
        })
    }

    fn run_step(
        &self,
        step: DeployStep,
        spec: &CommandSpec,
        events: &dyn DeployEventSink,
        executed: &mut Vec<String>,
    ) -> CommandOutput {
        events.on_event(DeployEvent::StepStarted {
            step,
            command: spec.command.clone(),
        });
        tracing::info!(
            step = step.name(),
            command = %spec.command,
            cwd = %spec.cwd.display(),
            "running"
        );

        let output = self.runner.run(spec);
        executed.push(spec.command.clone());

        tracing::debug!(
            step = step.name(),
            success = output.success,
            code = ?output.code,
            "finished"
        );
        if output.success {
            events.on_event(DeployEvent::StepSucceeded { step });
        }
        output
    }

    fn sanity_check(
        &self,
        options: &DeployOptions,
        working_dir: &Path,
        events: &dyn DeployEventSink,
        executed: &mut Vec<String>,
    ) -> Result<(), DeployError> {
        let log_path = working_dir.join(SANITY_LOG_FILE);
        let spec = CommandSpec::new(options.commands.check.as_str(), working_dir)
            .with_label(DeployStep::Check.label(options.target));
        let output = self.run_step(DeployStep::Check, &spec, events, executed);

        if output.success {
            events.on_event(DeployEvent::SanityPassed);
            remove_stale_log(&log_path)?;
            return Ok(());
        }

        let detail = output.error_detail();
        fs::write(&log_path, format!("Sanity Check Errors:\n{}\n", detail)).map_err(|source| {
            DeployError::File {
                path: log_path.clone(),
                source,
            }
        })?;
        events.on_event(DeployEvent::SanityFailed {
            log_path: log_path.clone(),
            detail: detail.clone(),
        });
        Err(DeployError::Validation { log_path, detail })
    }

    fn record_release_notes(
        &self,
        options: &DeployOptions,
        notes: &ReleaseNotes,
        events: &dyn DeployEventSink,
    ) -> Result<(), DeployError> {
        let path = options.changelog_dir.join(CHANGELOG_FILE);
        let file_error = |source| DeployError::File {
            path: path.clone(),
            source,
        };

        if !path.exists() {
            fs::write(&path, CHANGELOG_HEADER).map_err(file_error)?;
            events.on_event(DeployEvent::ChangelogCreated { path: path.clone() });
        }

        let section = format_section(options.target, notes, options.release_date);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(file_error)?;
        file.write_all(section.as_bytes()).map_err(file_error)?;

        events.on_event(DeployEvent::NotesAppended { path });
        Ok(())
    }
}

fn remove_stale_log(log_path: &Path) -> Result<(), DeployError> {
    match fs::remove_file(log_path) {
        Ok(()) => {
            tracing::debug!(path = %log_path.display(), "removed stale sanity log");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(DeployError::File {
            path: log_path.to_path_buf(),
            source,
        }),
    }
}
