//! Variant detection configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::variant::FrameworkVariant;

/// Controls which framework variants the detector may report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, schemars::JsonSchema)]
#[serde(default)]
pub struct DetectionConfig {
    /// Variants treated as absent even when their marker type is referenced.
    pub disabled_variants: Vec<FrameworkVariant>,
}

impl DetectionConfig {
    pub fn is_disabled(&self, variant: FrameworkVariant) -> bool {
        self.disabled_variants.contains(&variant)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_disabled(FrameworkVariant::None) {
            return Err(ConfigError::ValidationFailed {
                field: "detection.disabled_variants".to_string(),
                message: "'none' is the fallback variant and cannot be disabled".to_string(),
            });
        }
        Ok(())
    }
}
