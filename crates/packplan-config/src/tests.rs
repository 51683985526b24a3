//! Tests for catalog configuration loading.

use std::io::Write;

use super::*;

#[test]
fn toml_parsing() {
    let toml = r#"
        pack_sizes = [250, 500, 1000, 2000, 5000]

        [server]
        bind_addr = "127.0.0.1:9999"
    "#;

    let config = CatalogConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.pack_sizes, vec![250, 500, 1000, 2000, 5000]);
    assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
}

#[test]
fn toml_server_section_is_optional() {
    let config = CatalogConfig::from_toml_str("pack_sizes = [250]").unwrap();
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
}

#[test]
fn json_object_parsing() {
    let config =
        CatalogConfig::from_json_str(r#"{"pack_sizes": [250, 500], "server": {"bind_addr": "0.0.0.0:8081"}}"#)
            .unwrap();
    assert_eq!(config.pack_sizes, vec![250, 500]);
    assert_eq!(config.server.bind_addr, "0.0.0.0:8081");
}

#[test]
fn json_bare_array_parsing() {
    let config = CatalogConfig::from_json_str("[250, 500, 1000]").unwrap();
    assert_eq!(config.pack_sizes, vec![250, 500, 1000]);
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
}

#[test]
fn malformed_input_is_rejected() {
    assert!(CatalogConfig::from_toml_str("pack_sizes = \"nope\"").is_err());
    assert!(CatalogConfig::from_json_str("{not json").is_err());
    // Negative sizes are unrepresentable.
    assert!(CatalogConfig::from_json_str("[-5, 250]").is_err());
}

#[test]
fn empty_catalog_is_rejected() {
    let config = CatalogConfig::from_toml_str("pack_sizes = []").unwrap();
    let err = config.validated_sizes().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn zero_size_is_rejected() {
    let config = CatalogConfig::from_toml_str("pack_sizes = [250, 0, 500]").unwrap();
    let err = config.validated_sizes().unwrap_err();
    match err {
        ConfigError::Invalid(message) => assert!(message.contains("index 1")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sizes_are_sorted_and_deduplicated() {
    let config = CatalogConfig::from_toml_str("pack_sizes = [1000, 250, 500, 250]").unwrap();
    assert_eq!(config.validated_sizes().unwrap(), vec![250, 500, 1000]);
}

#[test]
fn load_dispatches_on_extension() {
    let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml_file, "pack_sizes = [250, 500]").unwrap();
    let config = CatalogConfig::load(toml_file.path()).unwrap();
    assert_eq!(config.pack_sizes, vec![250, 500]);

    let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    writeln!(json_file, "[250, 500, 1000]").unwrap();
    let config = CatalogConfig::load(json_file.path()).unwrap();
    assert_eq!(config.pack_sizes, vec![250, 500, 1000]);

    let yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    let err = CatalogConfig::load(yaml_file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

    assert!(matches!(
        CatalogConfig::load("does-not-exist.toml").unwrap_err(),
        ConfigError::Io(_)
    ));
}
