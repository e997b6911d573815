//! Variant catalog: which marker type signals which framework, and which
//! namespace each variant's generation attributes live in.

use vmgen_core::constants::{
    DX_ATTRIBUTE_NAMESPACE, DX_MARKER, MVVM_LIGHT_ATTRIBUTE_NAMESPACE, MVVM_LIGHT_MARKER,
    PRISM_ATTRIBUTE_NAMESPACE, PRISM_MARKER,
};
use vmgen_core::FrameworkVariant;

/// A marker type whose presence signals a framework variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerProbe {
    pub variant: FrameworkVariant,
    pub marker: &'static str,
}

/// Marker probes in canonical detection order.
pub const MARKER_PROBES: [MarkerProbe; 3] = [
    MarkerProbe {
        variant: FrameworkVariant::Dx,
        marker: DX_MARKER,
    },
    MarkerProbe {
        variant: FrameworkVariant::Prism,
        marker: PRISM_MARKER,
    },
    MarkerProbe {
        variant: FrameworkVariant::MvvmLight,
        marker: MVVM_LIGHT_MARKER,
    },
];

/// Namespace holding the variant's generation attributes.
/// `None` falls back to the primary namespace.
pub fn attribute_namespace(variant: FrameworkVariant) -> &'static str {
    match variant {
        FrameworkVariant::Dx | FrameworkVariant::None => DX_ATTRIBUTE_NAMESPACE,
        FrameworkVariant::Prism => PRISM_ATTRIBUTE_NAMESPACE,
        FrameworkVariant::MvvmLight => MVVM_LIGHT_ATTRIBUTE_NAMESPACE,
    }
}

/// The marker type for a framework variant; `None` has no marker.
pub fn marker_for(variant: FrameworkVariant) -> Option<&'static str> {
    MARKER_PROBES
        .iter()
        .find(|probe| probe.variant == variant)
        .map(|probe| probe.marker)
}
