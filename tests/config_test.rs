//! Config file loading and saving

use ecohunt::config::Config;
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_preserves_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.challenges.daily_count = 5;
    config.challenges.distinct_templates = true;
    config.showcase.earned_limit = 9;
    config.save_to_file(&path).unwrap();

    assert!(!path.with_extension("toml.tmp").exists());
    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_values_are_reported_with_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[challenges]\ndaily_count = 0\n").unwrap();

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("daily_count"));
}

#[test]
fn malformed_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[showcase\nearned_limit = ").unwrap();
    assert!(Config::load_or_default(&path).is_err());
}
