//! Configuration for the resolution engine, loaded from `vmgen.toml`.

pub mod detection_config;
pub mod tracing_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use detection_config::DetectionConfig;
pub use tracing_config::TracingConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, schemars::JsonSchema)]
#[serde(default)]
pub struct VmgenConfig {
    pub detection: DetectionConfig,
    pub tracing: TracingConfig,
}

impl VmgenConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    /// Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            message: e.to_string(),
        })
    }

    /// Read, parse, and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        Self::validate(&config)?;
        tracing::debug!(path = %path.display(), "loaded vmgen config");
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(config: &VmgenConfig) -> Result<(), ConfigError> {
        config.detection.validate()?;
        config.tracing.validate()?;
        Ok(())
    }

    /// JSON Schema for editor tooling and config linting.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(VmgenConfig)
    }
}
