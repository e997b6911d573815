//! Shared value types.

pub mod identity;
pub mod variant;
