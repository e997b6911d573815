//! One generation pass: the resolution context plus the candidates collected
//! during the syntax walk. Nothing here outlives the pass.

use vmgen_core::config::VmgenConfig;
use vmgen_core::{FrameworkVariant, LookupError, ResolveError, TypeUniverse};

use crate::collector::{CandidateCollector, DeclarationSite};
use crate::context::ResolutionContext;
use crate::tables::{CommonSymbolTable, VariantSymbolTable};

/// What the emitter needs to run one variant's generation strategy.
#[derive(Debug, Clone, Copy)]
pub struct VariantStrategy<'a> {
    pub variant: FrameworkVariant,
    pub table: &'a VariantSymbolTable,
    pub common: &'a CommonSymbolTable,
    pub is_win_ui: bool,
}

/// Owns the per-pass state handed to the emission stage.
#[derive(Debug)]
pub struct GenerationPass {
    context: ResolutionContext,
    candidates: Vec<DeclarationSite>,
}

impl GenerationPass {
    /// Resolve the universe and take ownership of the collected candidates.
    pub fn execute<U: TypeUniverse + ?Sized>(
        universe: &U,
        collector: CandidateCollector,
        config: &VmgenConfig,
    ) -> Result<Self, ResolveError> {
        let span = tracing::info_span!("generation_pass", compilation = %universe.compilation_id());
        let _enter = span.enter();

        let context = ResolutionContext::build_with_config(universe, config)?;
        let candidates = collector.into_candidates();
        tracing::debug!(candidates = candidates.len(), "generation pass resolved");

        Ok(Self {
            context,
            candidates,
        })
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    pub fn candidates(&self) -> &[DeclarationSite] {
        &self.candidates
    }

    /// One strategy per detected variant, in detection order.
    ///
    /// Only variants from the detected set are looked up, so a `LookupError`
    /// here indicates a broken context invariant.
    pub fn strategies(&self) -> Result<Vec<VariantStrategy<'_>>, LookupError> {
        let common = self.context.common();
        let is_win_ui = self.context.is_win_ui();
        Ok(self
            .context
            .detected_tables()?
            .into_iter()
            .map(|(variant, table)| VariantStrategy {
                variant,
                table,
                common,
                is_win_ui,
            })
            .collect())
    }
}
