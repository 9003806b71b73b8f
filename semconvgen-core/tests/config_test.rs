//! Tests for the semconvgen configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use semconvgen_core::config::{CliOverrides, JavaLayout, SemconvConfig};
use semconvgen_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_env_vars() {
    for key in [
        "SEMCONVGEN_REGISTRY",
        "SEMCONVGEN_OUTPUT_DIR",
        "SEMCONVGEN_JAVA_PACKAGE",
        "SEMCONVGEN_JAVA_LAYOUT",
        "SEMCONVGEN_OVERWRITE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("semconvgen.toml"),
        r#"
[java]
package = "com.example.project"
layout = "root-namespace"

[output]
dir = "out"
"#,
    )
    .unwrap();

    std::env::set_var("SEMCONVGEN_JAVA_PACKAGE", "com.example.env");

    let cli = CliOverrides {
        java_layout: Some(JavaLayout::SingleFile),
        ..Default::default()
    };

    let config = SemconvConfig::load(dir.path(), None, Some(&cli)).unwrap();

    // CLI beats project for layout
    assert_eq!(config.java.effective_layout(), JavaLayout::SingleFile);
    // Env beats project for package
    assert_eq!(config.java.effective_package(), "com.example.env");
    // Project value survives where nothing overrides it
    assert_eq!(config.output.dir, Some(PathBuf::from("out")));

    clear_env_vars();
}

#[test]
fn test_missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = SemconvConfig::load(dir.path(), None, None).unwrap();

    assert_eq!(
        config.java.effective_package(),
        "io.opentelemetry.instrumentation.api.semconv"
    );
    assert_eq!(config.java.effective_layout(), JavaLayout::Namespace);
    assert!(!config.output.effective_overwrite());
    assert_eq!(config.markdown.effective_file_name(), "registry.md");
}

#[test]
fn test_explicit_config_must_exist() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let missing = dir.path().join("nope.toml");
    let err = SemconvConfig::load(dir.path(), Some(&missing), None).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("semconvgen.toml"), "[java\npackage = ").unwrap();
    let err = SemconvConfig::load(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_invalid_env_layout_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("SEMCONVGEN_JAVA_LAYOUT", "sideways");
    let dir = tempdir();
    let err = SemconvConfig::load(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    clear_env_vars();
}

#[test]
fn test_validation_rejects_bad_package() {
    let config = SemconvConfig::from_toml("[java]\npackage = \"io..bad\"\n").unwrap();
    let err = SemconvConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "java.package"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validation_rejects_bad_class_name() {
    let config = SemconvConfig::from_toml("[java]\nclass_name = \"All Attributes\"\n").unwrap();
    assert!(SemconvConfig::validate(&config).is_err());
}

#[test]
fn test_unknown_keys_ignored() {
    let config = SemconvConfig::from_toml(
        r#"
[java]
layout = "single-file"
future_option = 3
"#,
    )
    .unwrap();
    assert_eq!(config.java.layout, Some(JavaLayout::SingleFile));
}

#[test]
fn test_toml_round_trip_keeps_layout() {
    let config = SemconvConfig::from_toml("[java]\nlayout = \"root-namespace\"\n").unwrap();
    let text = config.to_toml().unwrap();
    assert!(text.contains("root-namespace"));
}
