//! # vmgen-core
//!
//! Foundation crate for the vmgen resolution engine.
//! Defines the shared types, the host type-universe trait, errors, config,
//! tracing setup, and the well-known type names the resolver probes for.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::VmgenConfig;
pub use errors::error_code::VmgenErrorCode;
pub use errors::{ConfigError, LookupError, ResolveError};
pub use traits::TypeUniverse;
pub use types::identity::{CompilationId, TypeIdentity};
pub use types::variant::FrameworkVariant;
