//! Allow-list value object - maintainers permitted to publish.

use std::collections::BTreeSet;

/// Set of usernames allowed to deploy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    users: BTreeSet<String>,
}

impl AllowList {
    /// Build from raw entries; entries are trimmed and blanks dropped
    pub fn new<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let users = users
            .into_iter()
            .map(|u| u.as_ref().trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        Self { users }
    }

    /// Exact, case-sensitive membership check
    pub fn permits(&self, username: &str) -> bool {
        self.users.contains(username)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}
