//! Config loading from disk, validation, and schema generation.

use std::io::Write;

use vmgen_core::config::VmgenConfig;
use vmgen_core::errors::ConfigError;
use vmgen_core::{FrameworkVariant, VmgenErrorCode};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn from_file_loads_and_validates() {
    let file = write_config(
        r#"
[detection]
disabled_variants = ["mvvm_light"]

[tracing]
filter = "vmgen_resolve=debug"
with_target = false
"#,
    );
    let config = VmgenConfig::from_file(file.path()).unwrap();
    assert_eq!(config.detection.disabled_variants, vec![FrameworkVariant::MvvmLight]);
    assert_eq!(config.tracing.effective_filter(), "vmgen_resolve=debug");
    assert!(!config.tracing.effective_with_target());
}

#[test]
fn from_file_rejects_disabling_none() {
    let file = write_config(
        r#"
[detection]
disabled_variants = ["none"]
"#,
    );
    let err = VmgenConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    assert_eq!(err.error_code(), "CONFIG_VALIDATION_FAILED");
}

#[test]
fn from_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = VmgenConfig::from_file(&dir.path().join("vmgen.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert_eq!(err.error_code(), "CONFIG_IO_ERROR");
}

#[test]
fn invalid_syntax_is_parse_error() {
    let err = VmgenConfig::from_toml("this is not valid toml [[[").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_keys_ignored() {
    let config = VmgenConfig::from_toml(
        r#"
[detection]
disabled_variants = []
some_future_key = 1

[future_section]
key = "value"
"#,
    )
    .unwrap();
    assert!(config.detection.disabled_variants.is_empty());
}

#[test]
fn json_schema_describes_sections() {
    let schema = VmgenConfig::json_schema();
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("detection"));
    assert!(json.contains("disabled_variants"));
    assert!(json.contains("mvvm_light"));
}
