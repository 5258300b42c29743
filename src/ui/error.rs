use crate::application::DeployError;
use crate::error::ApolloError;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render an error with its cause chain and, when known, a fix hint.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            cause
        ));
    }

    if let Some(fix) = fix_hint(err) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("FIX:").bold().render(supports_color),
            fix
        ));
    }

    out
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "command": "deploy",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}

fn fix_hint(err: &anyhow::Error) -> Option<String> {
    let apollo = err.downcast_ref::<ApolloError>().or_else(|| {
        match err.downcast_ref::<DeployError>() {
            Some(DeployError::Config(inner)) => Some(inner),
            _ => None,
        }
    })?;

    match apollo {
        ApolloError::InvalidConfig { file, .. } => {
            Some(format!("Correct the TOML syntax in {}", file.display()))
        }
        ApolloError::InvalidWorkingPath { .. } => Some(
            "Point apollo_path at the package directory, or remove it to re-detect".to_string(),
        ),
        ApolloError::MissingDirectory { what } => Some(format!(
            "Set {} to choose the {} location explicitly",
            if *what == "home" { "PYPIRC" } else { "APOLLO_CONFIG" },
            what
        )),
        ApolloError::InvalidCredentials { file, .. } => {
            Some(format!("Repair or remove {} and run again", file.display()))
        }
        ApolloError::ConfigWrite { .. } | ApolloError::Io(_) => None,
    }
}
