//! Deploy target value object - which package index receives the upload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Package index a deploy publishes to.
///
/// There is no default: callers must choose explicitly (`--test` or `--prod`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    /// TestPyPI
    Test,
    /// Production PyPI
    Prod,
}

impl DeployTarget {
    /// Resolve the target from the mutually exclusive CLI flags.
    ///
    /// Returns `None` unless exactly one flag is set.
    pub fn from_flags(test: bool, prod: bool) -> Option<Self> {
        match (test, prod) {
            (true, false) => Some(DeployTarget::Test),
            (false, true) => Some(DeployTarget::Prod),
            _ => None,
        }
    }

    /// Repository name as known to twine and `.pypirc`
    pub fn repository(&self) -> &'static str {
        match self {
            DeployTarget::Test => "testpypi",
            DeployTarget::Prod => "pypi",
        }
    }

    /// Legacy upload endpoint, written into `.pypirc` for non-default indexes
    pub fn upload_url(&self) -> Option<&'static str> {
        match self {
            DeployTarget::Test => Some("https://test.pypi.org/legacy/"),
            DeployTarget::Prod => None,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, DeployTarget::Prod)
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.repository())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_requires_exactly_one() {
        assert_eq!(DeployTarget::from_flags(true, false), Some(DeployTarget::Test));
        assert_eq!(DeployTarget::from_flags(false, true), Some(DeployTarget::Prod));
        assert_eq!(DeployTarget::from_flags(false, false), None);
        assert_eq!(DeployTarget::from_flags(true, true), None);
    }

    #[test]
    fn repository_names() {
        assert_eq!(DeployTarget::Test.repository(), "testpypi");
        assert_eq!(DeployTarget::Prod.repository(), "pypi");
        assert_eq!(DeployTarget::Prod.to_string(), "pypi");
    }

    #[test]
    fn only_test_index_has_explicit_url() {
        assert!(DeployTarget::Test.upload_url().is_some());
        assert!(DeployTarget::Prod.upload_url().is_none());
    }
}
