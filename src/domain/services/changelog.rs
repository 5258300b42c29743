//! Changelog Domain Service
//!
//! Formats release-notes sections for `CHANGELOG.md`. Writing the file is the
//! application layer's job.

use chrono::NaiveDate;

use crate::domain::value_objects::DeployTarget;

/// File name, relative to the invocation directory
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Written once when the changelog is created
pub const CHANGELOG_HEADER: &str = "# Changelog\n\n";

/// Non-blank release notes, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes(String);

impl ReleaseNotes {
    /// Returns `None` for blank or whitespace-only input
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render one appended section: a heading labeled with the index and date,
/// followed by the notes.
pub fn format_section(target: DeployTarget, notes: &ReleaseNotes, date: NaiveDate) -> String {
    format!(
        "\n## {} Release Notes ({})\n{}\n",
        target.repository(),
        date.format("%Y-%m-%d"),
        notes.as_str()
    )
}
