use etg::config::Config;
use chrono::Utc;
use etg::timestamp::{FormatCode, FormatEngine, Zone};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_format, "F");
    assert_eq!(config.ui.default_format(), FormatCode::LongDateTime);
    assert_eq!(config.ui.toast_duration_ms, 2000);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.display.timezone, "local");
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown format code should fail
    config.ui.default_format = "x".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unparseable timezone
    config.ui.default_format = "R".to_string();
    config.display.timezone = "Mars/Olympus".to_string();
    assert!(config.validate().is_err());

    // Reset and test a broken pattern
    config.display.timezone = "+02:00".to_string();
    config.display.patterns.long_date = String::new();
    assert!(config.validate().is_err());

    // Reset and test out of range timings
    config.display.patterns = Default::default();
    config.ui.tick_rate_ms = 1;
    assert!(config.validate().is_err());
    config.ui.tick_rate_ms = 250;
    config.ui.toast_duration_ms = 120_000;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_format = \"F\""));
    assert!(toml_str.contains("timezone = \"local\""));
    assert!(toml_str.contains("date_time_separator = \" at \""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_format = "R"

[display]
timezone = "utc"

[display.patterns]
short_time = "%H:%M"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.default_format(), FormatCode::Relative);
    assert_eq!(config.display.zone().unwrap(), Zone::Utc);
    assert_eq!(config.display.patterns.short_time, "%H:%M");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.display.patterns.long_date, "%B %-d, %Y");
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_format, default_config.ui.default_format);
    assert_eq!(config.ui.toast_duration_ms, default_config.ui.toast_duration_ms);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.patterns, default_config.display.patterns);
}

#[test]
fn test_configured_formatter_renders_with_patterns() {
    use chrono::Utc;
    use etg::timestamp::FormatEngine;

    let mut config = Config::default();
    config.display.timezone = "utc".to_string();
    config.display.patterns.short_time = "%H:%M".to_string();

    let engine = FormatEngine::new(config.display.formatter().unwrap());
    let rendered = engine.render(1_700_000_000, FormatCode::ShortTime, Utc::now()).unwrap();
    assert_eq!(rendered, "22:13");
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("etg_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Event Timestamp Generator Configuration File"));
    assert!(content.contains("default_format = \"F\""));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.default_format, "F");

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_separator_with_percent_renders() {
    let config: Config = toml::from_str(
        r#"
[display]
timezone = "utc"

[display.patterns]
date_time_separator = " @ 100% "
"#,
    )
    .unwrap();
    assert!(config.validate().is_ok());

    let engine = FormatEngine::new(config.display.formatter().unwrap());
    assert_eq!(
        engine.render(1_700_000_000, FormatCode::ShortDateTime, Utc::now()).unwrap(),
        "November 14, 2023 @ 100% 10:13 PM"
    );
}

#[test]
fn test_malformed_offset_rejected() {
    let mut config = Config::default();
    for timezone in ["+:05:30:", "+5:30", "05:30"] {
        config.display.timezone = timezone.to_string();
        assert!(config.validate().is_err(), "{timezone:?} should be rejected");
    }
    config.display.timezone = "-08:00".to_string();
    assert!(config.validate().is_ok());
}
