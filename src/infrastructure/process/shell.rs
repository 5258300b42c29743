//! Shell Command Runner
//!
//! Runs command lines through the platform shell. Output is captured into
//! temp files so the child never blocks on a full pipe while the parent
//! animates the spinner.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use std::thread;

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::widgets::spinner::{Spinner, FRAME_INTERVAL};

/// Detail reported for a command stopped by Ctrl-C
pub const INTERRUPTED: &str = "interrupted";

static INSTALL_HANDLER: Once = Once::new();

/// Runs commands with `sh -c` (`cmd /C` on Windows).
pub struct ShellCommandRunner {
    animate: bool,
    unicode: bool,
    interrupted: Arc<AtomicBool>,
}

impl ShellCommandRunner {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            animate: ui.animation,
            unicode: ui.unicode,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Runner with no spinner output.
    pub fn quiet() -> Self {
        Self {
            animate: false,
            unicode: false,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share an interrupt flag; setting it kills the running child.
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    // Installed on first run so Ctrl-C still ends the process during prompts
    fn install_interrupt_handler(&self) {
        let flag = self.interrupted.clone();
        INSTALL_HANDLER.call_once(move || {
            if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
                tracing::warn!(error = %e, "could not install Ctrl-C handler");
            }
        });
    }

    fn spawn(&self, spec: &CommandSpec, stdout: &File, stderr: &File) -> io::Result<Child> {
        let mut command = shell_command(&spec.command);
        command
            .current_dir(&spec.cwd)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout.try_clone()?))
            .stderr(Stdio::from(stderr.try_clone()?));
        command.spawn()
    }

    /// Poll the child until it exits, ticking the spinner in between.
    fn wait(&self, child: &mut Child, label: &str) -> io::Result<Option<ExitStatus>> {
        let mut spinner = Spinner::new(label);
        let mut region = LiveRegion::new();
        let mut err = io::stderr();

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break Some(status);
            }
            if self.interrupted.load(Ordering::SeqCst) {
                tracing::warn!(pid = child.id(), "interrupted, killing child");
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            if self.animate {
                let _ = region.update(&mut err, &spinner.render(self.unicode));
                spinner.tick();
            }
            thread::sleep(FRAME_INTERVAL);
        };

        if self.animate {
            let _ = region.clear(&mut err);
        }
        tracing::debug!(elapsed_ms = spinner.elapsed().as_millis() as u64, "command finished");
        Ok(status)
    }

    fn execute(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
        let mut stdout = tempfile::tempfile()?;
        let mut stderr = tempfile::tempfile()?;

        let mut child = self.spawn(spec, &stdout, &stderr)?;
        let status = self.wait(&mut child, &spec.label)?;

        let out = read_captured(&mut stdout)?;
        let err = read_captured(&mut stderr)?;

        Ok(match status {
            Some(status) => CommandOutput {
                success: status.success(),
                code: status.code(),
                stdout: out,
                stderr: err,
            },
            None => CommandOutput {
                success: false,
                code: None,
                stdout: out,
                stderr: INTERRUPTED.to_string(),
            },
        })
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, spec: &CommandSpec) -> CommandOutput {
        self.install_interrupt_handler();
        if self.interrupted.load(Ordering::SeqCst) {
            return CommandOutput::failed(None, INTERRUPTED);
        }

        match self.execute(spec) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(command = %spec.command, error = %e, "could not run command");
                CommandOutput::failed(None, format!("could not run '{}': {}", spec.command, e))
            }
        }
    }
}

fn shell_command(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.args(["/C", command_line]);
        command
    } else {
        let mut command = Command::new("sh");
        command.args(["-c", command_line]);
        command
    }
}

fn read_captured(file: &mut File) -> io::Result<String> {
    file.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn run(command: &str, cwd: &std::path::Path) -> CommandOutput {
        ShellCommandRunner::quiet().run(&CommandSpec::new(command, cwd))
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let dir = tempdir().unwrap();
        let output = run("echo built", dir.path());

        assert!(output.success);
        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout, "built\n");
        assert_eq!(output.stderr, "");
    }

    #[test]
    fn failure_keeps_both_streams() {
        let dir = tempdir().unwrap();
        let output = run("echo out; echo err >&2; exit 3", dir.path());

        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.error_detail(), "out\nerr");
    }

    #[test]
    fn runs_in_working_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();

        let output = run("ls", dir.path());
        assert!(output.stdout.contains("marker.txt"));
    }

    #[test]
    fn env_is_set_on_child_only() {
        let dir = tempdir().unwrap();
        let spec = CommandSpec::new("printf %s \"$APOLLO_TEST_CHILD_ONLY\"", dir.path())
            .with_env("APOLLO_TEST_CHILD_ONLY", "prod");

        let output = ShellCommandRunner::quiet().run(&spec);

        assert_eq!(output.stdout, "prod");
        assert!(std::env::var("APOLLO_TEST_CHILD_ONLY").is_err());
    }

    #[test]
    fn large_output_does_not_block() {
        let dir = tempdir().unwrap();
        let output = run("i=0; while [ $i -lt 20000 ]; do echo line-$i; i=$((i+1)); done", dir.path());

        assert!(output.success);
        assert_eq!(output.stdout.lines().count(), 20000);
    }

    #[test]
    fn missing_directory_is_a_failed_output() {
        let dir = tempdir().unwrap();
        let output = run("true", &dir.path().join("nope"));

        assert!(!output.success);
        assert!(output.stderr.starts_with("could not run 'true'"));
    }

    #[test]
    fn raised_interrupt_flag_skips_the_command() {
        let dir = tempdir().unwrap();
        let flag = Arc::new(AtomicBool::new(true));
        let runner = ShellCommandRunner::quiet().with_interrupt_flag(flag);

        let output = runner.run(&CommandSpec::new("touch ran", dir.path()));

        assert!(!output.success);
        assert_eq!(output.error_detail(), INTERRUPTED);
        assert!(!dir.path().join("ran").exists());
    }
}
