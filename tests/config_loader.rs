mod common;

use common::temp_config;
use confetti::config::{Config, ConfigError};
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.expanded_min_columns, 120);
    assert_eq!(config.ui.medium_min_columns, 80);
    assert!(!config.ui.multi_pane);

    assert!(config.data.source.is_none());
    assert_eq!(config.data.latency_ms, 0);
    assert!(config.data.state_file.is_none());

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("confetti/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[ui]
multi_pane = true

[data]
source = "/srv/conferences.json"
latency_ms = 250
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert!(config.ui.multi_pane);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.data.source, Some(PathBuf::from("/srv/conferences.json")));
    assert_eq!(config.data.latency_ms, 250);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[ui\ntick_rate_ms = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_breakpoints_must_be_ordered() {
    let (_dir, path) = temp_config(
        r#"
[ui]
expanded_min_columns = 80
medium_min_columns = 100
"#,
    );
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("expanded_min_columns"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let (_dir, path) = temp_config("[logging]\nlevel = \"chatty\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("chatty")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_log_level_is_case_insensitive() {
    let (_dir, path) = temp_config("[logging]\nlevel = \"DEBUG\"\n");
    assert!(Config::load_from(&path).is_ok());
}
