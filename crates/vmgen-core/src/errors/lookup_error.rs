//! Caller-contract violations on a built resolution context.

use super::error_code::VmgenErrorCode;
use crate::types::variant::FrameworkVariant;

/// The driver asked for a table it never checked was present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Variant '{variant}' was not detected in this compilation; check the detected set before lookup")]
    VariantNotDetected { variant: FrameworkVariant },
}

impl VmgenErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::VariantNotDetected { .. } => "LOOKUP_VARIANT_NOT_DETECTED",
        }
    }
}
