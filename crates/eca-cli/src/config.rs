//! CLI configuration management.
//!
//! Values come from, in increasing precedence: built-in defaults, the JSON
//! config file, environment variables (a `.env` file is honoured), and
//! finally command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use eca_automaton::{PlaybackConfig, SimulationParams};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ECA_CONFIG";

/// Persisted defaults for every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default rule number.
    pub rule: i64,
    /// Default row width in cells.
    pub width: i64,
    /// Default number of generations.
    pub steps: i64,
    /// Delay between generations in milliseconds.
    pub tick_delay_ms: u64,
    /// Cell edge length in pixels for the desktop window.
    pub cell_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        let params = SimulationParams::default();
        let playback = PlaybackConfig::default();
        Self {
            rule: params.rule().value() as i64,
            width: params.width() as i64,
            steps: params.steps() as i64,
            tick_delay_ms: playback.tick_delay_ms,
            cell_size: playback.cell_size,
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config from {}", config_path.display())
                })?;
                config = serde_json::from_str(&contents).with_context(|| {
                    format!("Failed to parse config file {}", config_path.display())
                })?;
            }
        }

        // Environment takes precedence over the file
        env_override("ECA_RULE", &mut config.rule);
        env_override("ECA_WIDTH", &mut config.width);
        env_override("ECA_STEPS", &mut config.steps);
        env_override("ECA_TICK_DELAY_MS", &mut config.tick_delay_ms);
        env_override("ECA_CELL_SIZE", &mut config.cell_size);

        Ok(config)
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path =
            Self::config_file_path().context("No config directory available on this platform")?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(config_path)
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "eca", "eca").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Validated simulation parameters, with per-invocation overrides.
    pub fn params(
        &self,
        rule: Option<i64>,
        width: Option<i64>,
        steps: Option<i64>,
    ) -> Result<SimulationParams> {
        let params = SimulationParams::new(
            rule.unwrap_or(self.rule),
            width.unwrap_or(self.width),
            steps.unwrap_or(self.steps),
        )?;
        Ok(params)
    }

    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig {
            tick_delay_ms: self.tick_delay_ms,
            cell_size: self.cell_size,
        }
    }
}

fn env_override<T: std::str::FromStr>(key: &str, target: &mut T) {
    if let Ok(raw) = std::env::var(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warn!(key, value = %raw, "ignoring_malformed_env_var"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_playback_defaults() {
        let config = Config::default();
        assert_eq!((config.rule, config.width, config.steps), (110, 100, 150));
        assert_eq!(config.playback(), PlaybackConfig::default());
    }

    #[test]
    fn params_apply_overrides_and_validate() {
        let config = Config::default();
        let params = config.params(Some(30), None, Some(10)).unwrap();
        assert_eq!((params.rule().value(), params.width(), params.steps()), (30, 100, 10));

        let err = config.params(Some(300), None, None).unwrap_err();
        assert!(err.to_string().contains("invalid rule"));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"rule": 90}"#).unwrap();
        assert_eq!(config.rule, 90);
        assert_eq!(config.width, 100);
        assert_eq!(config.tick_delay_ms, 50);
    }
}
