//! Stable string codes for errors crossing the crate boundary.

/// Maps an error to a stable, machine-readable code.
pub trait VmgenErrorCode {
    fn error_code(&self) -> &'static str;
}
