//! Integration tests for smsdash-config: loading from disk.

use smsdash_config::{ConfigLoader, Settings};
use std::fs;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ConfigLoader::load_from_dir(dir.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_yaml_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("smsdash.yaml"),
        "server:\n  bind_address: 0.0.0.0:9000\n  session_idle_minutes: 30\ni18n:\n  default_language: fr\n",
    )
    .unwrap();

    let settings = ConfigLoader::load_from_dir(dir.path()).unwrap();
    assert_eq!(settings.server.bind_address, "0.0.0.0:9000");
    assert_eq!(settings.server.session_idle_minutes, 30);
    assert_eq!(settings.server.session_cookie, "smsdash_session");
    assert_eq!(settings.i18n.default_language, "fr");
}

#[test]
fn test_yml_extension_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("smsdash.yml"), "charts:\n  width: 1200\n").unwrap();

    let settings = ConfigLoader::load_from_dir(dir.path()).unwrap();
    assert_eq!(settings.charts.width, 1200);
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("smsdash.yaml"), "charts:\n  width: 10\n").unwrap();

    let err = ConfigLoader::load_from_dir(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_logging_settings_conversion() {
    let settings = ConfigLoader::from_yaml("logging:\n  level: debug\n  format: json\n").unwrap();
    let logging = settings.logging.to_logging_config();
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, smsdash_common::LogFormat::Json);
}
