//! Resolution diagnostics — what one pass detected and which capabilities
//! were unavailable.

use std::time::Duration;

use serde::Serialize;
use vmgen_core::FrameworkVariant;

use crate::tables::VariantSymbolTable;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolutionDiagnostics {
    pub variants_detected: Vec<FrameworkVariant>,
    pub is_win_ui: bool,
    pub referenced_libraries: usize,
    pub tables_built: usize,
    pub optional_resolved: usize,
    pub optional_absent: usize,
    /// `"<variant>:<type name>"` for every capability that did not resolve.
    pub absent_capabilities: Vec<String>,
    pub build_duration: Duration,
}

impl ResolutionDiagnostics {
    /// Count a freshly built table's optional capabilities.
    pub fn record_table(&mut self, variant: FrameworkVariant, table: &VariantSymbolTable) {
        self.tables_built += 1;
        for capability in table.capabilities() {
            if capability.identity.is_some() {
                self.optional_resolved += 1;
            } else {
                self.optional_absent += 1;
                self.absent_capabilities
                    .push(format!("{variant}:{}", capability.type_name));
            }
        }
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        let variants: Vec<&str> = self.variants_detected.iter().map(|v| v.name()).collect();
        format!(
            "[vmgen-resolve] variants [{}] (win_ui: {}), {} tables, {} optional resolved, \
             {} optional absent, {} referenced libraries",
            variants.join(", "),
            self.is_win_ui,
            self.tables_built,
            self.optional_resolved,
            self.optional_absent,
            self.referenced_libraries,
        )
    }
}
