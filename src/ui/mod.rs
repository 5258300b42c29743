//! Terminal presentation
//!
//! Design tokens, capability detection and the small rendering pieces the
//! deploy command prints with. Nothing in here decides workflow behavior.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod live_region;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
