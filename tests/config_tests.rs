mod common;

use pantry_core::config::{Config, Theme};
use pantry_core::domain::StorageLocation;
use pantry_core::errors::ConfigError;

#[test]
fn load_without_file_returns_defaults() {
    let manager = common::setup_config();
    assert!(!manager.path().exists());
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn save_then_load_keeps_preferences() {
    let manager = common::setup_config();
    let mut config = Config::default();
    config.set("theme", "plain").unwrap();
    config.set("default_storage", "frozen").unwrap();
    config.set("default_shelf_life_days", "10").unwrap();
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.theme, Theme::Plain);
    assert_eq!(loaded.default_storage, StorageLocation::Frozen);
    assert_eq!(loaded.default_shelf_life_days, 10);
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn unknown_theme_falls_back_to_iconic() {
    let manager = common::setup_config();
    std::fs::write(manager.path(), r#"{"theme": "neon", "load_sample_data": false}"#).unwrap();
    let loaded = manager.load().unwrap();
    assert_eq!(loaded.theme, Theme::Iconic);
    assert!(!loaded.load_sample_data);
}

#[test]
fn corrupt_file_is_reported() {
    let manager = common::setup_config();
    std::fs::write(manager.path(), "{ not json").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn every_key_is_listed() {
    let keys: Vec<_> = Config::default()
        .entries()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, Config::KEYS);
}
