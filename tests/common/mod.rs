//! Common test utilities for Apollo CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated package, invocation and home directories
//! - `WindowsCompatExt`: Home directory isolation for spawned commands
//! - Fixtures: Reusable config and `.pypirc` content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod windows;

pub use env::*;
pub use fixtures::*;
pub use windows::*;
