//! The closed set of supported MVVM framework variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported MVVM framework ecosystem, or the no-framework default.
///
/// `Dx` is the primary variant: its attribute namespace doubles as the
/// fallback attribute surface when nothing else is referenced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkVariant {
    /// DevExpress MVVM (primary).
    Dx,
    /// Prism.
    Prism,
    /// MVVM Light.
    MvvmLight,
    /// No recognized MVVM runtime is referenced.
    None,
}

impl FrameworkVariant {
    /// The framework variants, in canonical detection order. Excludes `None`.
    pub const FRAMEWORKS: [FrameworkVariant; 3] = [Self::Dx, Self::Prism, Self::MvvmLight];

    /// All four variants.
    pub fn all() -> &'static [FrameworkVariant] {
        &[Self::Dx, Self::Prism, Self::MvvmLight, Self::None]
    }

    pub fn is_primary(self) -> bool {
        matches!(self, Self::Dx)
    }

    /// Whether lookups for this variant are served by the primary table.
    pub fn uses_primary_table(self) -> bool {
        matches!(self, Self::Dx | Self::None)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dx => "dx",
            Self::Prism => "prism",
            Self::MvvmLight => "mvvm_light",
            Self::None => "none",
        }
    }
}

impl fmt::Display for FrameworkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
