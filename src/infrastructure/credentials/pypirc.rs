//! `.pypirc` Credential Store
//!
//! Keeps one INI section per package index. A section counts as usable when
//! it has a non-empty `password`. Missing sections are written from a token
//! the user is asked for; everything else in the file is preserved.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CredentialsConfig;
use crate::domain::ports::{CredentialError, CredentialStatus, CredentialStore, Prompter};
use crate::domain::value_objects::DeployTarget;
use crate::error::{ApolloError, ApolloResult};

const TOKEN_USERNAME: &str = "__token__";

/// Credential store backed by a `.pypirc` file.
#[derive(Debug, Clone)]
pub struct PypircStore {
    path: PathBuf,
}

impl PypircStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Configured path, or `~/.pypirc`.
    pub fn from_config(config: &CredentialsConfig) -> ApolloResult<Self> {
        if let Some(path) = &config.pypirc_path {
            return Ok(Self::new(path));
        }
        dirs::home_dir()
            .map(|home| Self::new(home.join(".pypirc")))
            .ok_or(ApolloError::MissingDirectory { what: "home" })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> ApolloResult<PypircDocument> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(PypircDocument::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PypircDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, doc: &PypircDocument) -> ApolloResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, doc.render())?;
        restrict_permissions(&self.path)?;
        Ok(())
    }
}

impl CredentialStore for PypircStore {
    fn ensure(
        &self,
        target: DeployTarget,
        prompter: &dyn Prompter,
    ) -> Result<CredentialStatus, CredentialError> {
        let repository = target.repository();
        let mut doc = self.read()?;

        if doc
            .value(repository, "password")
            .is_some_and(|p| !p.trim().is_empty())
        {
            tracing::debug!(path = %self.path.display(), repository, "credentials present");
            return Ok(CredentialStatus::Present {
                path: self.path.clone(),
            });
        }

        tracing::info!(path = %self.path.display(), repository, "no usable credentials");
        let token = prompter.secret(&format!(
            "No {} credentials found in {}. Enter an API token:",
            repository,
            self.path.display()
        ))?;
        let token = token.trim();
        if token.is_empty() {
            return Err(CredentialError::EmptyToken {
                repository: repository.to_string(),
            });
        }

        let mut entries = vec![
            ("username".to_string(), TOKEN_USERNAME.to_string()),
            ("password".to_string(), token.to_string()),
        ];
        if let Some(url) = target.upload_url() {
            entries.push(("repository".to_string(), url.to_string()));
        }
        doc.set_section(repository, entries);
        doc.add_index_server(repository);
        self.write(&doc)?;

        Ok(CredentialStatus::Created {
            path: self.path.clone(),
        })
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> ApolloResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> ApolloResult<()> {
    Ok(())
}

/// One `[name]` block and its raw lines (header excluded)
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    lines: Vec<String>,
}

/// Minimal INI document that round-trips lines it does not touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PypircDocument {
    /// Lines before the first section header
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl PypircDocument {
    fn parse(content: &str) -> Self {
        let mut doc = Self::default();
        for line in content.lines() {
            if let Some(name) = section_header(line) {
                doc.sections.push(Section {
                    name: name.to_string(),
                    lines: Vec::new(),
                });
                continue;
            }
            match doc.sections.last_mut() {
                Some(section) => section.lines.push(line.to_string()),
                None => doc.preamble.push(line.to_string()),
            }
        }
        doc
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        for section in &self.sections {
            out.push_str(&format!("[{}]\n", section.name));
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        let mut out = out.trim_end_matches('\n').to_string();
        out.push('\n');
        out
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Value of `key` in `section`, including indented continuation lines.
    fn value(&self, section: &str, key: &str) -> Option<String> {
        let section = self.section(section)?;
        let mut lines = section.lines.iter().peekable();

        while let Some(line) = lines.next() {
            let Some(first) = key_value(line, key) else {
                continue;
            };
            let mut parts = vec![first.to_string()];
            while let Some(next) = lines.peek() {
                if is_continuation(next) {
                    parts.push(next.trim().to_string());
                    lines.next();
                } else {
                    break;
                }
            }
            let joined = parts
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            return Some(joined);
        }
        None
    }

    /// Replace (or append) a section with exactly `entries`.
    fn set_section(&mut self, name: &str, entries: Vec<(String, String)>) {
        let mut lines: Vec<String> = entries
            .into_iter()
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        lines.push(String::new());

        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(section) => section.lines = lines,
            None => {
                if let Some(last) = self.sections.last_mut() {
                    if last.lines.last().is_some_and(|l| !l.trim().is_empty()) {
                        last.lines.push(String::new());
                    }
                }
                self.sections.push(Section {
                    name: name.to_string(),
                    lines,
                });
            }
        }
    }

    /// Make sure `[distutils] index-servers` lists `name`.
    fn add_index_server(&mut self, name: &str) {
        let mut servers: Vec<String> = self
            .value("distutils", "index-servers")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        if servers.iter().any(|s| s == name) {
            return;
        }
        servers.push(name.to_string());

        let mut entry = vec!["index-servers =".to_string()];
        entry.extend(servers.iter().map(|s| format!("    {}", s)));

        match self.sections.iter_mut().find(|s| s.name == "distutils") {
            Some(section) => {
                let mut kept = Vec::new();
                let mut lines = section.lines.iter().peekable();
                while let Some(line) = lines.next() {
                    if key_value(line, "index-servers").is_some() {
                        while lines.peek().is_some_and(|l| is_continuation(l)) {
                            lines.next();
                        }
                        continue;
                    }
                    kept.push(line.clone());
                }
                entry.extend(kept);
                section.lines = entry;
            }
            None => {
                entry.push(String::new());
                self.sections.insert(
                    0,
                    Section {
                        name: "distutils".to_string(),
                        lines: entry,
                    },
                );
            }
        }
    }
}

fn section_header(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// `key = value` / `key: value` at column 0
fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = line.strip_prefix(key)?.trim_start();
    rest.strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .map(str::trim)
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ScriptedPrompter;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_from_token() {
        let dir = tempdir().unwrap();
        let store = PypircStore::new(dir.path().join(".pypirc"));
        let prompter = ScriptedPrompter::new().with_text("  pypi-AgEtoken  ");

        let status = store.ensure(DeployTarget::Prod, &prompter).unwrap();

        assert_eq!(
            status,
            CredentialStatus::Created {
                path: store.path().to_path_buf()
            }
        );
        insta::assert_snapshot!(fs::read_to_string(store.path()).unwrap(), @r"
        [distutils]
        index-servers =
            pypi

        [pypi]
        username = __token__
        password = pypi-AgEtoken
        ");
        assert!(prompter.asked()[0].contains("No pypi credentials found"));
    }

    #[test]
    fn testpypi_section_carries_repository_url() {
        let dir = tempdir().unwrap();
        let store = PypircStore::new(dir.path().join(".pypirc"));
        let prompter = ScriptedPrompter::new().with_text("tok");

        store.ensure(DeployTarget::Test, &prompter).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("[testpypi]\nusername = __token__\npassword = tok\nrepository = https://test.pypi.org/legacy/\n"));
    }

    #[test]
    fn valid_section_is_left_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pypirc");
        let original = "# mine\n[distutils]\nindex-servers = pypi\n\n[pypi]\nusername: __token__\npassword: secret\n";
        fs::write(&path, original).unwrap();
        let store = PypircStore::new(&path);
        let prompter = ScriptedPrompter::new();

        let status = store.ensure(DeployTarget::Prod, &prompter).unwrap();

        assert!(matches!(status, CredentialStatus::Present { .. }));
        assert!(prompter.asked().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn new_section_extends_existing_index_servers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pypirc");
        fs::write(
            &path,
            "[distutils]\nindex-servers =\n    pypi\n\n[pypi]\nusername = __token__\npassword = prod-token\n",
        )
        .unwrap();
        let store = PypircStore::new(&path);

        store
            .ensure(DeployTarget::Test, &ScriptedPrompter::new().with_text("test-token"))
            .unwrap();

        let doc = PypircDocument::parse(&fs::read_to_string(&path).unwrap());
        assert_eq!(
            doc.value("distutils", "index-servers").as_deref(),
            Some("pypi\ntestpypi")
        );
        assert_eq!(doc.value("pypi", "password").as_deref(), Some("prod-token"));
        assert_eq!(doc.value("testpypi", "password").as_deref(), Some("test-token"));
    }

    #[test]
    fn section_without_password_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pypirc");
        fs::write(&path, "[pypi]\nusername = someone\npassword =\n").unwrap();
        let store = PypircStore::new(&path);

        let status = store
            .ensure(DeployTarget::Prod, &ScriptedPrompter::new().with_text("fresh"))
            .unwrap();

        assert!(matches!(status, CredentialStatus::Created { .. }));
        let doc = PypircDocument::parse(&fs::read_to_string(&path).unwrap());
        assert_eq!(doc.value("pypi", "username").as_deref(), Some("__token__"));
        assert_eq!(doc.value("pypi", "password").as_deref(), Some("fresh"));
        assert_eq!(doc.sections.iter().filter(|s| s.name == "pypi").count(), 1);
    }

    #[test]
    fn blank_token_is_rejected_and_file_untouched() {
        let dir = tempdir().unwrap();
        let store = PypircStore::new(dir.path().join(".pypirc"));

        let err = store
            .ensure(DeployTarget::Test, &ScriptedPrompter::new().with_text("   "))
            .unwrap_err();

        assert!(matches!(err, CredentialError::EmptyToken { ref repository } if repository == "testpypi"));
        assert!(!store.path().exists());
    }

    #[test]
    fn unanswered_prompt_is_prompt_error() {
        let dir = tempdir().unwrap();
        let store = PypircStore::new(dir.path().join(".pypirc"));

        let err = store
            .ensure(DeployTarget::Test, &ScriptedPrompter::new())
            .unwrap_err();
        assert!(matches!(err, CredentialError::Prompt(_)));
    }

    #[cfg(unix)]
    #[test]
    fn written_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = PypircStore::new(dir.path().join(".pypirc"));
        store
            .ensure(DeployTarget::Prod, &ScriptedPrompter::new().with_text("tok"))
            .unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn configured_path_wins() {
        let config = CredentialsConfig {
            pypirc_path: Some(PathBuf::from("/tmp/custom-pypirc")),
        };
        let store = PypircStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/custom-pypirc"));
    }

    #[test]
    fn key_value_accepts_both_separators() {
        assert_eq!(key_value("password = a", "password"), Some("a"));
        assert_eq!(key_value("password: b", "password"), Some("b"));
        assert_eq!(key_value("  password = c", "password"), None);
        assert_eq!(key_value("passwords = d", "password"), None);
    }
}
