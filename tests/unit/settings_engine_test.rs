//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, validation and reset.

use std::fs;

use shoptrail::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use shoptrail::types::errors::SettingsError;
use shoptrail::types::settings::AppSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, AppSettings::default());
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("search.country", serde_json::json!("DE"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.search.country, "DE");
}

#[test]
fn test_set_value_optional_field() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("storage.data_dir", serde_json::json!("/srv/shoptrail"))
        .unwrap();
    assert_eq!(
        engine.get_settings().storage.data_dir.as_deref(),
        Some("/srv/shoptrail")
    );
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("search.region", serde_json::json!("EU"));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));

    let result = engine.set_value("nope.country", serde_json::json!("EU"));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));

    let result = engine.set_value("", serde_json::json!(true));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));
}

#[test]
fn test_set_value_through_scalar_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("search.page.inner", serde_json::json!(1));
    assert!(matches!(result, Err(SettingsError::InvalidKey(_))));
}

#[test]
fn test_set_value_rejects_wrong_type_and_keeps_previous() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("search.page", serde_json::json!("two"));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings().search.page, 1);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("logging.level", serde_json::json!("debug"))
        .unwrap();
    assert_eq!(engine.get_settings().logging.level, "debug");

    engine.reset().unwrap();

    assert_eq!(*engine.get_settings(), AppSettings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), AppSettings::default());
}

#[test]
fn test_load_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let engine_path = dir.path().join("settings.json");
    fs::write(&engine_path, "{ invalid json }").unwrap();

    let mut engine = engine_in_temp(&dir);
    let result = engine.load();
    assert!(matches!(result, Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b").join("settings.json");
    let engine = SettingsEngine::new(Some(nested.to_string_lossy().to_string()));

    engine.save().unwrap();

    assert!(nested.exists());
}
