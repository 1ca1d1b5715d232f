//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default selector values (the pending minutes/seconds a fresh engine
//!   starts with)
//! - History display limit
//!
//! Configuration is stored at `~/.config/bubbletimer/config.toml`.

use serde::{Deserialize, Serialize};

use super::data_dir;

/// Selector defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    #[serde(default = "default_seconds")]
    pub default_seconds: u32,
}

/// History display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How many recent sessions the presentation layer shows.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/bubbletimer/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_minutes() -> u32 {
    1
}

fn default_seconds() -> u32 {
    5
}

fn default_display_limit() -> usize {
    10
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            default_seconds: default_seconds(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get a value by dotted key, e.g. `selector.default_minutes`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "selector.default_minutes" => Some(self.selector.default_minutes.to_string()),
            "selector.default_seconds" => Some(self.selector.default_seconds.to_string()),
            "history.display_limit" => Some(self.history.display_limit.to_string()),
            _ => None,
        }
    }

    /// Set a value by dotted key, then save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "selector.default_minutes" => self.selector.default_minutes = value.parse()?,
            "selector.default_seconds" => self.selector.default_seconds = value.parse()?,
            "history.display_limit" => self.history.display_limit = value.parse()?,
            _ => return Err(format!("unknown key: {key}").into()),
        }
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.selector.default_minutes, 1);
        assert_eq!(cfg.selector.default_seconds, 5);
        assert_eq!(cfg.history.display_limit, 10);
    }

    #[test]
    fn partial_section_fills_rest() {
        let cfg: Config = toml::from_str("[selector]\ndefault_minutes = 25\n").unwrap();
        assert_eq!(cfg.selector.default_minutes, 25);
        assert_eq!(cfg.selector.default_seconds, 5);
        assert_eq!(cfg.history.display_limit, 10);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.history.display_limit = 25;
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.history.display_limit, 25);
    }

    #[test]
    fn get_supports_dotted_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("selector.default_minutes").unwrap(), "1");
        assert_eq!(cfg.get("history.display_limit").unwrap(), "10");
        assert!(cfg.get("nope").is_none());
    }
}
