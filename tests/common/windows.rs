//! Windows-compatible home directory isolation.
//!
//! On Windows, `dirs::home_dir()` uses the system API instead of `HOME`, so
//! tests also point Apollo's own overrides at the temporary home.

use std::path::Path;
use std::process::Command;

/// Variables from the developer's shell that would leak into a test run.
const INHERITED_OVERRIDES: &[&str] = &[
    "APOLLO_PATH",
    "APOLLO_ALLOWED_USERS",
    "APOLLO_LOG",
    "LNAME",
    "USERNAME",
];

pub trait WindowsCompatExt {
    /// Isolate config, credentials and identity under `home`.
    ///
    /// This sets:
    /// - `HOME` and `USERPROFILE`
    /// - `XDG_CONFIG_HOME`
    /// - `APOLLO_CONFIG` (config file inside the fake home)
    /// - `PYPIRC` (credentials file inside the fake home)
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl WindowsCompatExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        for key in INHERITED_OVERRIDES {
            self.env_remove(key);
        }

        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APOLLO_CONFIG", home.join(".config/apollo/config.toml"))
            .env("PYPIRC", home.join(".pypirc"))
    }
}
