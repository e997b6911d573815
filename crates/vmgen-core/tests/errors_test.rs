//! Error codes and messages, plus tracing initialisation.

use vmgen_core::config::TracingConfig;
use vmgen_core::errors::*;
use vmgen_core::tracing::init_tracing;
use vmgen_core::FrameworkVariant;

#[test]
fn fatal_and_contract_errors_have_distinct_codes() {
    let fatal = ResolveError::MissingRequiredType {
        variant: FrameworkVariant::Prism,
        name: "DevExpress.Mvvm.CodeGenerators.Prism.GenerateCommandAttribute".to_string(),
    };
    let contract = LookupError::VariantNotDetected {
        variant: FrameworkVariant::Prism,
    };
    assert_ne!(fatal.error_code(), contract.error_code());
    assert!(fatal.to_string().contains("prism"));
    assert!(contract.to_string().contains("not detected"));
}

#[test]
fn resolve_error_exposes_missing_name() {
    let err = ResolveError::MissingCommonType {
        name: "System.Boolean".to_string(),
    };
    assert_eq!(err.type_name(), "System.Boolean");
    assert_eq!(err.error_code(), "RESOLVE_MISSING_COMMON_TYPE");
}

#[test]
fn init_tracing_is_idempotent() {
    let config = TracingConfig::default();
    let _ = init_tracing(&config);
    assert!(!init_tracing(&config), "second install must be a no-op");
}
