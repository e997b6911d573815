//! Variant detection — which MVVM runtimes does this compilation reference?
//!
//! Detection probes one marker type per framework. All present markers are
//! recorded; `None` is added only when nothing else was found. The result is
//! kept in canonical order, so probe order never affects it.

pub mod catalog;

use serde::Serialize;
use smallvec::SmallVec;
use vmgen_core::config::DetectionConfig;
use vmgen_core::constants::DX_CLASSIC_MARKER;
use vmgen_core::{FrameworkVariant, TypeUniverse};

use catalog::{MarkerProbe, MARKER_PROBES};

/// Ordered, duplicate-free set of detected variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantSet(SmallVec<[FrameworkVariant; 4]>);

impl VariantSet {
    pub fn contains(&self, variant: FrameworkVariant) -> bool {
        self.0.contains(&variant)
    }

    pub fn iter(&self) -> impl Iterator<Item = FrameworkVariant> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[FrameworkVariant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no framework runtime was detected.
    pub fn is_none_only(&self) -> bool {
        self.0.as_slice() == [FrameworkVariant::None]
    }

    /// Insert keeping canonical order.
    fn insert(&mut self, variant: FrameworkVariant) {
        if let Err(pos) = self.0.binary_search(&variant) {
            self.0.insert(pos, variant);
        }
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = FrameworkVariant;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, FrameworkVariant>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Result of variant detection for one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub variants: VariantSet,
    /// DevExpress WinUI runtime profile. Only meaningful when `Dx` is detected;
    /// always `false` otherwise.
    pub is_win_ui: bool,
}

impl Detection {
    pub fn contains(&self, variant: FrameworkVariant) -> bool {
        self.variants.contains(variant)
    }

    /// Whether the primary table slot is populated (`Dx` or the `None` fallback).
    pub fn needs_primary_table(&self) -> bool {
        self.contains(FrameworkVariant::Dx) || self.contains(FrameworkVariant::None)
    }
}

/// Detect variants with the default configuration.
pub fn detect<U: TypeUniverse + ?Sized>(universe: &U) -> Detection {
    detect_with_config(universe, &DetectionConfig::default())
}

/// Detect variants, skipping those the config disables.
pub fn detect_with_config<U: TypeUniverse + ?Sized>(
    universe: &U,
    config: &DetectionConfig,
) -> Detection {
    detect_with_probes(universe, config, &MARKER_PROBES)
}

fn detect_with_probes<U: TypeUniverse + ?Sized>(
    universe: &U,
    config: &DetectionConfig,
    probes: &[MarkerProbe],
) -> Detection {
    let mut variants = VariantSet::default();

    for probe in probes {
        if config.is_disabled(probe.variant) {
            tracing::debug!(variant = %probe.variant, "variant disabled by config, skipping probe");
            continue;
        }
        if universe.contains_type(probe.marker) {
            tracing::debug!(variant = %probe.variant, marker = probe.marker, "framework marker found");
            variants.insert(probe.variant);
        }
    }

    if variants.is_empty() {
        variants.insert(FrameworkVariant::None);
    }

    // Both DevExpress profiles share a namespace, so the profile is inferred
    // from the classic-only helper being absent.
    let is_win_ui =
        variants.contains(FrameworkVariant::Dx) && !universe.contains_type(DX_CLASSIC_MARKER);

    Detection {
        variants,
        is_win_ui,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::UniverseBuilder;
    use vmgen_core::constants::{DX_MARKER, MVVM_LIGHT_MARKER, PRISM_MARKER};

    fn permutations(probes: &[MarkerProbe]) -> Vec<Vec<MarkerProbe>> {
        if probes.len() <= 1 {
            return vec![probes.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..probes.len() {
            let mut rest = probes.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn empty_universe_detects_none() {
        let universe = UniverseBuilder::new().freeze();
        let detection = detect(&universe);
        assert!(detection.variants.is_none_only());
        assert!(!detection.is_win_ui);
    }

    #[test]
    fn all_markers_are_recorded() {
        let universe = UniverseBuilder::new()
            .with_types([DX_MARKER, PRISM_MARKER, MVVM_LIGHT_MARKER])
            .freeze();
        let detection = detect(&universe);
        assert_eq!(detection.variants.as_slice(), FrameworkVariant::FRAMEWORKS);
    }

    #[test]
    fn probe_order_never_changes_the_result() {
        let universes = [
            UniverseBuilder::new().freeze(),
            UniverseBuilder::new().with_type(MVVM_LIGHT_MARKER).freeze(),
            UniverseBuilder::new()
                .with_types([MVVM_LIGHT_MARKER, DX_MARKER])
                .freeze(),
            UniverseBuilder::new()
                .with_types([DX_MARKER, PRISM_MARKER, MVVM_LIGHT_MARKER, DX_CLASSIC_MARKER])
                .freeze(),
        ];
        let config = DetectionConfig::default();
        for universe in &universes {
            let baseline = detect(universe);
            for order in permutations(&MARKER_PROBES) {
                assert_eq!(detect_with_probes(universe, &config, &order), baseline);
            }
        }
    }

    #[test]
    fn win_ui_truth_table() {
        // DX without the classic helper → WinUI.
        let winui = UniverseBuilder::new().with_type(DX_MARKER).freeze();
        assert!(detect(&winui).is_win_ui);

        // DX with the classic helper → classic.
        let classic = UniverseBuilder::new()
            .with_types([DX_MARKER, DX_CLASSIC_MARKER])
            .freeze();
        assert!(!detect(&classic).is_win_ui);

        // Classic helper alone: DX not detected, flag stays false.
        let helper_only = UniverseBuilder::new().with_type(DX_CLASSIC_MARKER).freeze();
        let detection = detect(&helper_only);
        assert!(detection.variants.is_none_only());
        assert!(!detection.is_win_ui);
    }

    #[test]
    fn disabled_variant_is_treated_as_absent() {
        let universe = UniverseBuilder::new()
            .with_types([DX_MARKER, PRISM_MARKER])
            .freeze();
        let config = DetectionConfig {
            disabled_variants: vec![FrameworkVariant::Dx],
        };
        let detection = detect_with_config(&universe, &config);
        assert_eq!(detection.variants.as_slice(), [FrameworkVariant::Prism]);
        assert!(!detection.is_win_ui);

        let all_disabled = DetectionConfig {
            disabled_variants: vec![FrameworkVariant::Prism, FrameworkVariant::Dx],
        };
        assert!(detect_with_config(&universe, &all_disabled)
            .variants
            .is_none_only());
    }
}
