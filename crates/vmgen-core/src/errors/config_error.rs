//! Configuration loading and validation errors.

use super::error_code::VmgenErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {message}")]
    ParseError { message: String },

    #[error("Config serialize error: {message}")]
    SerializeError { message: String },

    #[error("Config validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VmgenErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => "CONFIG_PARSE_ERROR",
            Self::SerializeError { .. } => "CONFIG_SERIALIZE_ERROR",
            Self::ValidationFailed { .. } => "CONFIG_VALIDATION_FAILED",
            Self::Io(_) => "CONFIG_IO_ERROR",
        }
    }
}
