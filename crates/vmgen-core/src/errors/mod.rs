//! Error types for every vmgen subsystem.
//!
//! Resolution failures come in two distinct kinds: `ResolveError` is
//! configuration-fatal (the host environment is malformed), `LookupError` is a
//! caller-contract violation in the generation driver. Absence of an optional
//! capability is not an error at all.

pub mod config_error;
pub mod error_code;
pub mod lookup_error;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use error_code::VmgenErrorCode;
pub use lookup_error::LookupError;
pub use resolve_error::ResolveError;
