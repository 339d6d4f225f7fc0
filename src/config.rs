//! Configuration management for the Event Timestamp Generator
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_TICK_RATE_MS, DEFAULT_TOAST_DURATION_MS, MAX_TICK_RATE_MS,
    MAX_TOAST_DURATION_MS, MIN_TICK_RATE_MS,
};
use crate::timestamp::{FormatCode, PatternFormatter, StylePatterns, Zone};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Format selected when the form opens
    /// Options: "t", "T", "d", "D", "f", "F", "R"
    pub default_format: String,
    /// How long toast notifications stay visible
    pub toast_duration_ms: u64,
    /// Redraw interval in milliseconds
    pub tick_rate_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Zone used to read the date/time field and render absolute styles
    /// Options: "local", "utc", or an offset such as "+05:30"
    pub timezone: String,
    /// strftime patterns used for each style
    pub patterns: StylePatterns,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            default_format: FormatCode::LongDateTime.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: Zone::Local.to_string(),
            patterns: StylePatterns::default(),
        }
    }
}

impl UiConfig {
    /// The configured default format, falling back to `F`
    pub fn default_format(&self) -> FormatCode {
        self.default_format.parse().unwrap_or(FormatCode::LongDateTime)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl DisplayConfig {
    /// Parse the configured zone
    pub fn zone(&self) -> Result<Zone> {
        self.timezone
            .parse::<Zone>()
            .with_context(|| format!("Invalid timezone '{}'", self.timezone))
    }

    /// Build the locale provider described by this section
    pub fn formatter(&self) -> Result<PatternFormatter> {
        PatternFormatter::new(self.zone()?, self.patterns.clone()).context("Invalid display patterns")
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            log::info!("Loading configuration from {}", path.display());
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if let Err(e) = self.ui.default_format.parse::<FormatCode>() {
            anyhow::bail!("default_format: {}", e);
        }

        if self.ui.toast_duration_ms > MAX_TOAST_DURATION_MS {
            anyhow::bail!(
                "toast_duration_ms cannot exceed {} ms, got {}",
                MAX_TOAST_DURATION_MS,
                self.ui.toast_duration_ms
            );
        }

        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                MIN_TICK_RATE_MS,
                MAX_TICK_RATE_MS,
                self.ui.tick_rate_ms
            );
        }

        // Validate display settings
        self.display.formatter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Event Timestamp Generator Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
