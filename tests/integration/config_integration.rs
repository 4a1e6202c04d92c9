//! Integration tests for the configuration system

use aigp::config::ConfigLoader;
use aigp::HashAlgorithm;
use tempfile::TempDir;

#[test]
fn test_workspace_config_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        r#"
[hashing]
flat_algorithm = "sha512"

[output]
format = "json"
pretty = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.hashing.flat_algorithm, HashAlgorithm::Sha512);
    assert_eq!(config.output.format, "json");
    assert!(!config.output.pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_explicit_file_with_bad_values_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("aigp.toml");
    std::fs::write(
        &path,
        r#"
[output]
format = "yaml"

[logging]
output = "syslog"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_malformed_toml_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("aigp.toml");
    std::fs::write(&path, "[hashing\nflat_algorithm = ").unwrap();
    assert!(ConfigLoader::load_from_file(&path).is_err());
}
