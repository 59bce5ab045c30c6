//! Tests for loading the table configuration.

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use tichect::GameConfig;
use tichect_rules::EdgePolicy;

/// Writes `content` to a temporary TOML file; the handle keeps it alive.
fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = GameConfig::load_or_default(dir.path().join("tichect.toml"))
        .expect("Missing file should not fail");
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.edge_policy(), EdgePolicy::Bounded);
    assert!(*config.attack_requires_placement());
    assert!(*config.render_rotated());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = config_file("");
    let config = GameConfig::from_file(file.path()).expect("Empty file should parse");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_house_rules_are_read() {
    let file = config_file(
        r#"
edge_policy = "legacy"
attack_requires_placement = false
render_rotated = false
"#,
    );
    let config = GameConfig::load_or_default(file.path()).expect("Config should parse");
    assert_eq!(*config.edge_policy(), EdgePolicy::Legacy);
    assert!(!*config.attack_requires_placement());
    assert!(!*config.render_rotated());
}

#[test]
fn test_bad_file_reports_location() {
    let file = config_file("edge_policy = \"sideways\"");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_default_round_trips_through_toml() {
    let text = toml::to_string(&GameConfig::default()).expect("Serialize failed");
    let file = config_file(&text);
    assert_eq!(
        GameConfig::from_file(file.path()).expect("Parse failed"),
        GameConfig::default()
    );
}
