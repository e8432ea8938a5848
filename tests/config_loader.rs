use homescreen::config::{Config, ConfigError, HomeConfig};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.home.search_debounce_ms, 400);
    assert_eq!(config.home.search_debounce(), Duration::from_millis(400));
    assert_eq!(config.home.effect_buffer, 16);
    assert!(!config.home.supersede_fetches);
    assert!(config.storage.preferences_path.is_none());
    assert!(config.storage.saved_state_path.is_none());
    assert!(config.directory.path.is_none());
    assert_eq!(config.directory.latency(), Duration::ZERO);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("homescreen/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"[home]
supersede_fetches = true

[directory]
path = "/tmp/users.json"
latency_ms = 250
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.home.supersede_fetches);
    assert_eq!(config.home.search_debounce_ms, 400);
    assert_eq!(
        config.directory.path.as_deref(),
        Some(std::path::Path::new("/tmp/users.json"))
    );
    assert_eq!(config.directory.latency(), Duration::from_millis(250));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_fails_zero_debounce() {
    let config = Config {
        home: HomeConfig {
            search_debounce_ms: 0,
            ..HomeConfig::default()
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("search_debounce_ms"));
}

#[test]
fn test_validation_fails_empty_effect_buffer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[home]\neffect_buffer = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_parse_error_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[home\nbroken").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}
