//! Tracing subscriber configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, schemars::JsonSchema)]
#[serde(default)]
pub struct TracingConfig {
    /// `EnvFilter` directive string. Default: "info". `VMGEN_LOG` overrides it.
    pub filter: Option<String>,
    /// Include the event target in formatted output. Default: true.
    pub with_target: Option<bool>,
}

impl TracingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_with_target(&self) -> bool {
        self.with_target.unwrap_or(true)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.filter {
            if let Err(e) = tracing_subscriber::EnvFilter::try_new(filter) {
                return Err(ConfigError::ValidationFailed {
                    field: "tracing.filter".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}
