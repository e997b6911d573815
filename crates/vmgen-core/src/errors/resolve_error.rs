//! Configuration-fatal resolution errors.

use super::error_code::VmgenErrorCode;
use crate::types::variant::FrameworkVariant;

/// A required identity failed to resolve. Aborts the whole generation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Required common type '{name}' is missing from the compilation")]
    MissingCommonType { name: String },

    #[error("Required type '{name}' for detected variant '{variant}' is missing from the compilation")]
    MissingRequiredType {
        variant: FrameworkVariant,
        name: String,
    },
}

impl ResolveError {
    /// The fully-qualified name that failed to resolve.
    pub fn type_name(&self) -> &str {
        match self {
            Self::MissingCommonType { name } | Self::MissingRequiredType { name, .. } => name,
        }
    }
}

impl VmgenErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCommonType { .. } => "RESOLVE_MISSING_COMMON_TYPE",
            Self::MissingRequiredType { .. } => "RESOLVE_MISSING_REQUIRED_TYPE",
        }
    }
}
