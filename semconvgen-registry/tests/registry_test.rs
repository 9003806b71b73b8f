//! Registry loading tests against the shared fixtures.

use std::path::PathBuf;

use semconvgen_core::errors::RegistryError;
use semconvgen_registry::{PrimitiveType, Registry};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../test-fixtures/registry")
        .join(name)
}

#[test]
fn test_load_fixture_file() {
    let registry = Registry::load(&fixture("attributes_root_ns.yaml")).unwrap();
    assert_eq!(registry.len(), 7);

    let attr = registry.get("first.attr_one_a").unwrap();
    assert_eq!(attr.attr_type().primitive(), PrimitiveType::Int);
    assert_eq!(attr.brief(), "short description of attr_one_a");

    let template = registry.get("third.attr_template_three").unwrap();
    assert!(template.is_template());

    let names: Vec<_> = registry.iter().map(|a| a.name()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_brief_kept_verbatim() {
    let registry = Registry::load(&fixture("group_by_root_namespace.yaml")).unwrap();
    let attr = registry.get("first.last_attr").unwrap();
    assert!(attr.brief().contains("`<key>`"));
    assert!(attr.brief().contains("#getName())."));
}

#[test]
fn test_load_directory_merges_files() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("a.yaml"),
        "attributes:\n  - id: first.attr_one\n    type: boolean\n    brief: one\n",
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(
        dir.path().join("nested/b.json"),
        r#"{"attributes":[{"id":"second.attr_two","type":"string","brief":"two"}]}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("README.md"), "not a registry").unwrap();

    let registry = Registry::load(dir.path()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.root_namespaces(), vec!["first", "second"]);
}

#[test]
fn test_load_directory_with_glob_characters() {
    let dir = tempfile::TempDir::new().unwrap();
    let model = dir.path().join("model[v1]?");
    std::fs::create_dir(&model).unwrap();
    std::fs::write(
        model.join("a.yaml"),
        "attributes:\n  - id: first.attr_one\n    type: boolean\n    brief: one\n",
    )
    .unwrap();

    let registry = Registry::load(&model).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get("first.attr_one").is_some());
}

#[test]
fn test_duplicate_across_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let body = "attributes:\n  - id: first.attr_one\n    type: boolean\n    brief: one\n";
    std::fs::write(dir.path().join("a.yaml"), body).unwrap();
    std::fs::write(dir.path().join("b.yml"), body).unwrap();

    let err = Registry::load(dir.path()).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateAttribute { .. }));
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Registry::load(dir.path()).unwrap_err();
    assert!(matches!(err, RegistryError::Empty { .. }));
}

#[test]
fn test_missing_file() {
    let err = Registry::load(&fixture("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}
