use crate::config::{AnimationMode, ColorMode, OutputConfig};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        cli_color: Option<ColorMode>,
        cli_no_animation: bool,
        output: &OutputConfig,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, cli_no_animation, output, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorMode>,
        cli_no_animation: bool,
        output: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        // CLI flag first, then config; `auto` defers to the terminal
        let color = match cli_color.unwrap_or(output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        let animation = if json || cli_no_animation || caps.is_ci {
            false
        } else {
            match output.animation {
                AnimationMode::Never => false,
                AnimationMode::Always | AnimationMode::Auto => caps.is_tty,
            }
        };

        Self {
            json,
            caps,
            color,
            unicode,
            animation,
        }
    }

    /// Context for tests and scripted use: no color, no animation, ASCII.
    pub fn plain() -> Self {
        Self {
            json: false,
            caps: TerminalCapabilities {
                is_tty: false,
                stdin_is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
            color: false,
            unicode: false,
            animation: false,
        }
    }
}
