//! Shell configuration
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object is a valid config. When no locale is configured it is negotiated
//! from the POSIX locale variables.

use app_ui::theme::ThemeName;
use i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid config JSON
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for config loading
pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_log() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI language; negotiated from the environment when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Color theme
    pub theme: ThemeName,
    /// `tracing` filter directive
    #[serde(default = "default_log")]
    pub log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            theme: ThemeName::default(),
            log: default_log(),
        }
    }
}

impl AppConfig {
    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, locale: Option<Locale>, theme: Option<ThemeName>) -> Self {
        if locale.is_some() {
            self.locale = locale;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    /// Locale to start with, negotiating `env_tags` if none is configured
    pub fn resolve_locale<S: AsRef<str>>(&self, env_tags: &[S]) -> Locale {
        self.locale.unwrap_or_else(|| Locale::negotiate(env_tags))
    }
}

/// Language tags from `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order
pub fn env_language_tags() -> Vec<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .filter_map(|value| posix_language_tag(&value))
        .collect()
}

/// Turn a POSIX locale name such as `kk_KZ.UTF-8` into a language tag
pub fn posix_language_tag(value: &str) -> Option<String> {
    let name = value
        .split(|c: char| c == '.' || c == '@')
        .next()
        .unwrap_or_default();
    match name {
        "" | "C" | "POSIX" => None,
        name => Some(name.replace('_', "-")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.locale, None);
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.log, "info");
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json(r#"{"locale":"en","log":"debug"}"#).unwrap();
        assert_eq!(config.locale, Some(Locale::En));
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            AppConfig::from_json(r#"{"theme":"neon"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(Some(Locale::En), None);
        assert_eq!(config.locale, Some(Locale::En));
        assert_eq!(config.theme, ThemeName::Light);

        let config = config.with_overrides(None, Some(ThemeName::Dark));
        assert_eq!(config.locale, Some(Locale::En));
        assert_eq!(config.theme, ThemeName::Dark);
    }

    #[test]
    fn test_resolve_locale() {
        let unset = AppConfig::default();
        assert_eq!(unset.resolve_locale(&["en-US"]), Locale::En);
        assert_eq!(unset.resolve_locale(&["de-DE"]), Locale::Kk);
        assert_eq!(unset.resolve_locale::<&str>(&[]), Locale::Kk);

        let set = AppConfig::default().with_overrides(Some(Locale::Kk), None);
        assert_eq!(set.resolve_locale(&["en-US"]), Locale::Kk);
    }

    #[test]
    fn test_posix_language_tag() {
        assert_eq!(posix_language_tag("kk_KZ.UTF-8"), Some("kk-KZ".to_string()));
        assert_eq!(posix_language_tag("en_GB@euro"), Some("en-GB".to_string()));
        assert_eq!(posix_language_tag("en"), Some("en".to_string()));
        assert_eq!(posix_language_tag("C.UTF-8"), None);
        assert_eq!(posix_language_tag("POSIX"), None);
        assert_eq!(posix_language_tag(""), None);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            AppConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
