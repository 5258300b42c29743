//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

pub mod changelog;

pub use changelog::{format_section, ReleaseNotes, CHANGELOG_FILE, CHANGELOG_HEADER};
