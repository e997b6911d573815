//! Context aggregator — the immutable per-pass bundle of detection results and
//! symbol tables, with a single fail-fast dispatch for the generation stage.

use std::time::Instant;

use vmgen_core::config::VmgenConfig;
use vmgen_core::{CompilationId, FrameworkVariant, LookupError, ResolveError, TypeUniverse};

use crate::detection::{detect_with_config, Detection, VariantSet};
use crate::diagnostics::ResolutionDiagnostics;
use crate::tables::{
    build_common, build_table, CommonSymbolTable, DxSymbols, MvvmLightSymbols, PrismSymbols,
    VariantSymbolTable,
};

/// Everything the generation stage needs to know about one compilation.
///
/// Built once per pass and never mutated. A variant's table slot is filled iff
/// that variant was detected; the primary slot serves both `Dx` and `None`.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    compilation: CompilationId,
    detection: Detection,
    primary: Option<VariantSymbolTable>,
    prism: Option<VariantSymbolTable>,
    mvvm_light: Option<VariantSymbolTable>,
    common: CommonSymbolTable,
    diagnostics: ResolutionDiagnostics,
}

impl ResolutionContext {
    /// Build with the default configuration.
    pub fn build<U: TypeUniverse + ?Sized>(universe: &U) -> Result<Self, ResolveError> {
        Self::build_with_config(universe, &VmgenConfig::default())
    }

    /// Detect, resolve every detected variant's table and the common table.
    /// Any required-identity miss aborts the whole build.
    pub fn build_with_config<U: TypeUniverse + ?Sized>(
        universe: &U,
        config: &VmgenConfig,
    ) -> Result<Self, ResolveError> {
        let started = Instant::now();
        let detection = detect_with_config(universe, &config.detection);

        let mut diagnostics = ResolutionDiagnostics {
            variants_detected: detection.variants.as_slice().to_vec(),
            is_win_ui: detection.is_win_ui,
            referenced_libraries: universe.referenced_libraries().len(),
            ..Default::default()
        };

        let mut primary = None;
        let mut prism = None;
        let mut mvvm_light = None;

        for variant in &detection.variants {
            let table = build_table(variant, universe, detection.is_win_ui)?;
            diagnostics.record_table(variant, &table);
            let slot = match variant {
                FrameworkVariant::Dx | FrameworkVariant::None => &mut primary,
                FrameworkVariant::Prism => &mut prism,
                FrameworkVariant::MvvmLight => &mut mvvm_light,
            };
            *slot = Some(table);
        }

        let common = build_common(universe)?;
        diagnostics.build_duration = started.elapsed();
        tracing::info!(compilation = %universe.compilation_id(), "{}", diagnostics.summary());

        Ok(Self {
            compilation: universe.compilation_id(),
            detection,
            primary,
            prism,
            mvvm_light,
            common,
            diagnostics,
        })
    }

    /// Dispatch to a variant's table.
    ///
    /// `Dx` and `None` both map to the primary table. Any other variant must be
    /// in the detected set; asking for one that is not is a driver bug and
    /// returns `LookupError::VariantNotDetected` rather than a default table.
    pub fn lookup(&self, variant: FrameworkVariant) -> Result<&VariantSymbolTable, LookupError> {
        let slot = match variant {
            FrameworkVariant::Dx | FrameworkVariant::None => self.primary.as_ref(),
            FrameworkVariant::Prism => self.prism.as_ref(),
            FrameworkVariant::MvvmLight => self.mvvm_light.as_ref(),
        };
        slot.ok_or(LookupError::VariantNotDetected { variant })
    }

    /// Each detected variant paired with its table, via `lookup`.
    pub fn detected_tables(&self) -> Result<Vec<(FrameworkVariant, &VariantSymbolTable)>, LookupError> {
        self.detection
            .variants
            .iter()
            .map(|variant| self.lookup(variant).map(|table| (variant, table)))
            .collect()
    }

    pub fn compilation(&self) -> CompilationId {
        self.compilation
    }

    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    pub fn variants(&self) -> &VariantSet {
        &self.detection.variants
    }

    pub fn is_detected(&self, variant: FrameworkVariant) -> bool {
        self.detection.contains(variant)
    }

    /// DevExpress WinUI profile flag; `false` when `Dx` is not detected.
    pub fn is_win_ui(&self) -> bool {
        self.detection.is_win_ui
    }

    pub fn common(&self) -> &CommonSymbolTable {
        &self.common
    }

    pub fn diagnostics(&self) -> &ResolutionDiagnostics {
        &self.diagnostics
    }

    pub fn dx(&self) -> Option<&DxSymbols> {
        self.primary.as_ref().and_then(VariantSymbolTable::as_dx)
    }

    pub fn prism(&self) -> Option<&PrismSymbols> {
        self.prism.as_ref().and_then(VariantSymbolTable::as_prism)
    }

    pub fn mvvm_light(&self) -> Option<&MvvmLightSymbols> {
        self.mvvm_light.as_ref().and_then(VariantSymbolTable::as_mvvm_light)
    }
}
