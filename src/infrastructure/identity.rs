//! Invoking user lookup.

/// Environment variables consulted for the login name, in order
const USER_VARS: &[&str] = &["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Login name of the invoking user, if the environment names one.
pub fn current_username() -> Option<String> {
    current_username_from(|key| std::env::var(key).ok())
}

pub(crate) fn current_username_from(get_env: impl Fn(&str) -> Option<String>) -> Option<String> {
    USER_VARS
        .iter()
        .filter_map(|key| get_env(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        current_username_from(|k| map.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn logname_wins() {
        assert_eq!(
            lookup(&[("USER", "bob"), ("LOGNAME", "alice")]).as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn blank_values_are_skipped() {
        assert_eq!(
            lookup(&[("LOGNAME", " "), ("USER", ""), ("USERNAME", "carol")]).as_deref(),
            Some("carol")
        );
    }

    #[test]
    fn nothing_set_is_none() {
        assert_eq!(lookup(&[]), None);
    }
}
