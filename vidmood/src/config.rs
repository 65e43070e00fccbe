//! Configuration loading for vidmood.
//!
//! Reads `$XDG_CONFIG_HOME/vidmood/config.toml` (falling back to
//! `~/.config/vidmood/config.toml`) with two optional keys: `theme` and
//! `api_key`. The `VIDMOOD_API_KEY` environment variable always wins over
//! the file, so the credential never needs to live on disk at all. Config
//! errors are soft failures printed to stderr before the terminal is
//! initialised; they never prevent startup.

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

/// Parsed contents of `config.toml`. All keys are optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Theme name; `None` means the default theme.
    #[serde(default)]
    pub theme: Option<String>,
    /// YouTube Data API key. Overridden by `VIDMOOD_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Config {
    /// Loads the config file, returning defaults when it is missing or
    /// unparseable. Never panics.
    pub fn load() -> Self {
        let path = config_path();
        let raw = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("vidmood: config parse error in {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// The theme name to use, defaulting to `catppuccin-mocha`.
    pub fn theme_name(&self) -> &str {
        self.theme.as_deref().unwrap_or("catppuccin-mocha")
    }

    /// Resolves the API key: environment variable first, then the config
    /// file. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        env::var("VIDMOOD_API_KEY")
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
            .or_else(|| {
                self.api_key
                    .as_deref()
                    .map(|key| key.trim().to_owned())
                    .filter(|key| !key.is_empty())
            })
    }
}

/// Returns the path to the vidmood config file.
///
/// Prefers `$XDG_CONFIG_HOME/vidmood/config.toml`; falls back to
/// `~/.config/vidmood/config.toml` when the env var is absent.
fn config_path() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("vidmood").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_keys() {
        let config: Config =
            toml::from_str("theme = \"dark\"\napi_key = \"k123\"").unwrap();
        assert_eq!(config.theme_name(), "dark");
        assert_eq!(config.api_key.as_deref(), Some("k123"));
    }

    #[test]
    fn missing_keys_fall_back() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme_name(), "catppuccin-mocha");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn blank_api_key_counts_as_absent() {
        let config = Config { theme: None, api_key: Some("   ".to_owned()) };
        // Only meaningful when the env var is unset, which is the normal
        // test environment.
        if env::var("VIDMOOD_API_KEY").is_err() {
            assert!(config.resolve_api_key().is_none());
        }
    }
}
