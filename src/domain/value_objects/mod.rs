//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod allow_list;
mod build_mode;
mod deploy_target;

pub use allow_list::AllowList;
pub use build_mode::BuildMode;
pub use deploy_target::DeployTarget;
