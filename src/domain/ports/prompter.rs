//! Prompter Port
//!
//! This trait defines the interactive questions the deploy workflow asks.
//! Implementations can be interactive (terminal) or scripted (tests, automation).

use std::collections::VecDeque;
use std::sync::Mutex;

use thiserror::Error;

/// Why a prompt produced no answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Input stream closed or no scripted answer left
    #[error("no input available for prompt '{0}'")]
    Closed(String),

    /// Terminal or IO failure while prompting
    #[error("prompt failed: {0}")]
    Io(String),
}

/// Trait for asking the user questions.
///
/// Implementations:
/// - `TerminalPrompter`: dialoguer on a TTY, line-based stdin otherwise
/// - `ScriptedPrompter`: replays canned answers
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask for free text. An empty answer is valid.
    fn text(&self, prompt: &str) -> Result<String, PromptError>;

    /// Ask for a secret; input is not echoed where the terminal allows it.
    fn secret(&self, prompt: &str) -> Result<String, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        (**self).confirm(prompt, default)
    }

    fn text(&self, prompt: &str) -> Result<String, PromptError> {
        (**self).text(prompt)
    }

    fn secret(&self, prompt: &str) -> Result<String, PromptError> {
        (**self).secret(prompt)
    }
}

/// Prompter that replays scripted answers in order.
///
/// Confirmations and text answers are queued separately; secrets share the
/// text queue. An exhausted queue yields `PromptError::Closed`.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirms: Mutex<VecDeque<bool>>,
    texts: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a yes/no answer
    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.lock().unwrap_or_else(|e| e.into_inner()).push_back(answer);
        self
    }

    /// Queue a text (or secret) answer
    pub fn with_text(self, answer: impl Into<String>) -> Self {
        self.texts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(answer.into());
        self
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, prompt: &str) {
        self.asked
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
    }

    fn next_text(&self, prompt: &str) -> Result<String, PromptError> {
        self.record(prompt);
        self.texts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .ok_or_else(|| PromptError::Closed(prompt.to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        self.record(prompt);
        self.confirms
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .ok_or_else(|| PromptError::Closed(prompt.to_string()))
    }

    fn text(&self, prompt: &str) -> Result<String, PromptError> {
        self.next_text(prompt)
    }

    fn secret(&self, prompt: &str) -> Result<String, PromptError> {
        self.next_text(prompt)
    }
}
