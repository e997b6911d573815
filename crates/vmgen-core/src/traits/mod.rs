//! Shared traits used across vmgen crates.

pub mod type_universe;

pub use type_universe::TypeUniverse;
