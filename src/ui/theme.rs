use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::fmt;

/// Design tokens for the Apollo CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";

    pub const DEPLOY: &str = "🚀";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const INFO: &str = "[INFO]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";

    pub const DEPLOY: &str = "[DEPLOY]";
}

// ----------------------------------------------------------------------------
// ApolloTheme - dialoguer theme that follows the color decision
// ----------------------------------------------------------------------------

/// Theme for dialoguer prompts.
///
/// Delegates to `ColorfulTheme` when color is enabled and to `SimpleTheme`
/// otherwise, so `--color never` and `NO_COLOR` also apply to prompts.
pub struct ApolloTheme {
    color: bool,
    colorful: ColorfulTheme,
}

impl ApolloTheme {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            colorful: ColorfulTheme::default(),
        }
    }

    fn inner(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &SimpleTheme
        }
    }
}

impl Theme for ApolloTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner().format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner().format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner()
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner().format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner().format_input_prompt_selection(f, prompt, sel)
    }

    fn format_password_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_password_prompt(f, prompt)
    }

    fn format_password_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
    ) -> fmt::Result {
        self.inner().format_password_prompt_selection(f, prompt)
    }
}
