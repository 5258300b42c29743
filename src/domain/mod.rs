//! Domain Layer
//!
//! The publishing vocabulary of Apollo, without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DeployTarget, BuildMode, AllowList)
//! - `services/` - Domain services (changelog formatting)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
