//! Terminal Prompter
//!
//! Asks deploy questions with dialoguer when stdin and stderr are a terminal,
//! and falls back to reading answers line by line otherwise (pipes, CI).

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

use dialoguer::{Confirm, Input, Password};

use crate::domain::ports::{PromptError, Prompter};
use crate::ui::context::UiContext;
use crate::ui::theme::ApolloTheme;

/// Prompter backed by the process terminal.
pub struct TerminalPrompter {
    interactive: bool,
    theme: ApolloTheme,
    lines: LinePrompter,
}

impl TerminalPrompter {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            interactive: ui.caps.stdin_is_tty && ui.caps.is_tty,
            theme: ApolloTheme::new(ui.color),
            lines: LinePrompter::stdio(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        if !self.interactive {
            return self.lines.confirm(prompt, default);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| PromptError::Io(e.to_string()))
    }

    fn text(&self, prompt: &str) -> Result<String, PromptError> {
        if !self.interactive {
            return self.lines.text(prompt);
        }
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PromptError::Io(e.to_string()))
    }

    fn secret(&self, prompt: &str) -> Result<String, PromptError> {
        if !self.interactive {
            return self.lines.secret(prompt);
        }
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| PromptError::Io(e.to_string()))
    }
}

/// Line-oriented prompter: writes the question, reads one line per answer.
///
/// End of input is `PromptError::Closed`.
pub struct LinePrompter {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl LinePrompter {
    pub fn new<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }

    fn ask(&self, question: &str) -> Result<String, PromptError> {
        {
            let mut out = self
                .output
                .lock()
                .map_err(|_| PromptError::Io("output lock poisoned".to_string()))?;
            write!(out, "{} ", question).map_err(|e| PromptError::Io(e.to_string()))?;
            out.flush().map_err(|e| PromptError::Io(e.to_string()))?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|_| PromptError::Io("input lock poisoned".to_string()))?
            .read_line(&mut line)
            .map_err(|e| PromptError::Io(e.to_string()))?;
        if read == 0 {
            return Err(PromptError::Closed(question.to_string()));
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        tracing::debug!(prompt = question, "read answer from input");
        Ok(answer)
    }
}

impl Prompter for LinePrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("{} {}", prompt, hint))?;
        Ok(parse_confirm(&answer, default))
    }

    fn text(&self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)
    }

    fn secret(&self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)
    }
}

fn parse_confirm(answer: &str, default: bool) -> bool {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}
