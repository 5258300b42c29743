use crate::config::ConfigWarning;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn format_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for w in warnings {
        let icon = Icon::Warning.colored(ui.color, ui.unicode);
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Print unknown-key warnings to stderr (suppressed in JSON mode).
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json || warnings.is_empty() {
        return;
    }
    eprint!("{}", format_config_warnings(warnings, ui));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_includes_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "allowed_user".to_string(),
            file: PathBuf::from("config.toml"),
            line: Some(2),
            suggestion: Some("allowed_users".to_string()),
        }];

        let rendered = format_config_warnings(&warnings, &UiContext::plain());
        assert_eq!(
            rendered,
            "[WARN] Unknown config key 'allowed_user' in config.toml:2\n   Did you mean 'allowed_users'?\n"
        );
    }

    #[test]
    fn warning_without_line() {
        let warnings = vec![ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("c.toml"),
            line: None,
            suggestion: None,
        }];

        let rendered = format_config_warnings(&warnings, &UiContext::plain());
        assert_eq!(rendered, "[WARN] Unknown config key 'colour' in c.toml\n");
    }
}
