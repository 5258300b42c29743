//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::CommandsConfig;
use crate::domain::value_objects::{AllowList, BuildMode, DeployTarget};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Index to publish to
    pub target: DeployTarget,
    /// Invoking OS user
    pub username: String,
    /// Maintainers allowed to publish
    pub allow_list: AllowList,
    /// Skip `twine check`
    pub skip_sanity_check: bool,
    /// Append `--verbose` to the upload command
    pub verbose: bool,
    /// Exported to clean/build commands as `ENV`
    pub build_mode: BuildMode,
    /// Directory holding `CHANGELOG.md` (the invocation directory)
    pub changelog_dir: PathBuf,
    /// Date stamped on release-notes sections
    pub release_date: NaiveDate,
    /// Shell commands for each step
    pub commands: CommandsConfig,
}

impl DeployOptions {
    pub fn new(target: DeployTarget, username: impl Into<String>) -> Self {
        Self {
            target,
            username: username.into(),
            allow_list: AllowList::default(),
            skip_sanity_check: false,
            verbose: false,
            build_mode: BuildMode::default(),
            changelog_dir: PathBuf::from("."),
            release_date: chrono::Local::now().date_naive(),
            commands: CommandsConfig::default(),
        }
    }

    pub fn with_allow_list(mut self, allow_list: AllowList) -> Self {
        self.allow_list = allow_list;
        self
    }

    pub fn with_skip_sanity_check(mut self, skip: bool) -> Self {
        self.skip_sanity_check = skip;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    pub fn with_changelog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.changelog_dir = dir.into();
        self
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = date;
        self
    }

    pub fn with_commands(mut self, commands: CommandsConfig) -> Self {
        self.commands = commands;
        self
    }

    /// Upload command line for the selected index
    pub fn upload_command(&self) -> String {
        let mut command = self
            .commands
            .upload
            .replace("{repository}", self.target.repository());
        if self.verbose {
            command.push_str(" --verbose");
        }
        command
    }
}
