// Config persistence in both supported formats.

use shapekit_core::{ResizeMode, SelectionHandle};
use shapekit_settings::{Config, ConfigError, SettingsError};
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::default();
    config.resize.default_handle = SelectionHandle::TopLeft;
    config.resize.default_mode = ResizeMode::ResizeBounds;
    config.resize.skip_start_and_end_callbacks = true;
    config.resize.angle_tolerance = 1e-4;
    config.logging.level = "shapekit_designer=trace".to_string();
    config.logging.json = true;
    config
}

#[test]
fn test_toml_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[resize]"));
    assert!(text.contains("default_handle = \"top_left\""));
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = custom_config();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("shapekit").join("config.toml");

    Config::default().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_save_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.resize.angle_tolerance = -1.0;
    let err = config.save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_load_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_load_reports_parse_errors() {
    let temp_dir = TempDir::new().unwrap();

    let toml_path = temp_dir.path().join("config.toml");
    std::fs::write(&toml_path, "[resize\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml_path),
        Err(SettingsError::TomlError(_))
    ));

    let json_path = temp_dir.path().join("config.json");
    std::fs::write(&json_path, "{ \"resize\": { \"default_mode\": \"stretch\" } }").unwrap();
    assert!(matches!(
        Config::load_from_file(&json_path),
        Err(SettingsError::JsonError(_))
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&temp_dir.path().join("config.json")).unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
}
