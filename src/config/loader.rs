//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ApolloError, ApolloResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ApolloResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ApolloError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the config file when present, defaults otherwise; env overrides win either way
pub fn load_or_default(path: &Path) -> ApolloResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok((with_env_overrides(Config::default()), Vec::new()));
    }

    let (config, warnings) = load_with_warnings(path)?;
    tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (APOLLO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // APOLLO_PATH
    if let Some(path) = get_env("APOLLO_PATH").filter(|p| !p.trim().is_empty()) {
        config.apollo_path = Some(PathBuf::from(path));
    }

    // APOLLO_ALLOWED_USERS (comma-separated)
    if let Some(users) = get_env("APOLLO_ALLOWED_USERS") {
        let parsed: Vec<String> = users
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.deploy.allowed_users = parsed;
        }
    }

    // PYPIRC
    if let Some(path) = get_env("PYPIRC").filter(|p| !p.trim().is_empty()) {
        config.credentials.pypirc_path = Some(PathBuf::from(path));
    }

    config
}

/// Default location of the user config file.
///
/// `APOLLO_CONFIG` wins, then `$XDG_CONFIG_HOME/apollo/config.toml`, then the
/// platform config directory.
pub fn default_config_path() -> ApolloResult<PathBuf> {
    if let Ok(path) = std::env::var("APOLLO_CONFIG") {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    dirs_config_dir()
        .map(|dir| dir.join("apollo").join("config.toml"))
        .ok_or(ApolloError::MissingDirectory { what: "config" })
}

/// Save `apollo_path` as a top-level key of the config file.
///
/// Rewrites an existing `apollo_path` line in place, otherwise inserts the key
/// before the first table header. Everything else is kept verbatim.
pub fn save_apollo_path(config_path: &Path, apollo_path: &Path) -> ApolloResult<()> {
    let value = toml::Value::String(apollo_path.to_string_lossy().into_owned());
    let entry = format!("apollo_path = {}", value);

    let existing = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let mut lines: Vec<String> = existing.lines().map(|s| s.to_string()).collect();
    let mut replaced = false;

    for line in &mut lines {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            break;
        }
        if is_key_line(trimmed, "apollo_path") {
            *line = entry.clone();
            replaced = true;
            break;
        }
    }

    if !replaced {
        lines.insert(0, entry);
    }

    let mut new_content = lines.join("\n");
    new_content.push('\n');

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(config_path, new_content).map_err(|e| ApolloError::ConfigWrite {
        file: config_path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %config_path.display(), "cached apollo_path");
    Ok(())
}

fn is_key_line(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .map(|rest| rest.trim_start().starts_with('='))
        .unwrap_or(false)
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "apollo_path",
        "deploy",
        "allowed_users",
        "commands",
        "clean",
        "build",
        "check",
        "upload",
        "credentials",
        "pypirc_path",
        "output",
        "color",
        "animation",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
