//! # vmgen-resolve
//!
//! Framework detection and symbol resolution for the view-model generator.
//!
//! Architecture:
//! - `detection` — marker catalog + detector producing the variant set and sub-mode
//! - `tables` — per-variant and common symbol table builders
//! - `context` — the immutable `ResolutionContext` with fail-fast `lookup`
//! - `collector` — passive candidate declaration collection
//! - `pass` — one generation pass bundling context and candidates
//! - `universe` — interned in-memory `TypeUniverse` for hosts and tests

pub mod collector;
pub mod context;
pub mod detection;
pub mod diagnostics;
pub mod pass;
pub mod tables;
pub mod universe;

pub use collector::{CandidateCollector, DeclarationSite, SyntaxNode, SyntaxReceiver};
pub use context::ResolutionContext;
pub use detection::{detect, detect_with_config, Detection, VariantSet};
pub use diagnostics::ResolutionDiagnostics;
pub use pass::{GenerationPass, VariantStrategy};
pub use tables::{
    build_common, build_table, CommonSymbolTable, DxServices, DxSymbols, FrameworkAttributes,
    MvvmLightSymbols, PrismSymbols, VariantSymbolTable,
};
pub use universe::{InMemoryUniverse, UniverseBuilder};
