use crate::languages;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config directory")]
    NoConfigDir,

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Theme setting for the UI
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns true if dark mode should be used.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Get display name for the theme
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {} (expected light or dark)", s)),
        }
    }
}

/// Translation panel settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PanelConfig {
    /// Default source language code
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Default target language code
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    /// Quiet period after the last edit before a translation is requested
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "uz".to_string()
}

fn default_debounce_ms() -> u64 {
    250
}

/// Settings for the external translation service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// Endpoint of the translation service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppearanceConfig {
    /// Theme: light or dark
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub panel: PanelConfig,

    #[serde(default)]
    pub translator: TranslatorConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("com", "transly", "transly")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default path, or create default if not exists
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default if not exists
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !languages::is_supported(&self.panel.source_lang) {
            return Err(ConfigError::ValidationError(format!(
                "unknown source language code: {}",
                self.panel.source_lang
            )));
        }

        if !languages::is_supported(&self.panel.target_lang) {
            return Err(ConfigError::ValidationError(format!(
                "unknown target language code: {}",
                self.panel.target_lang
            )));
        }

        if self.panel.debounce_ms > 10_000 {
            return Err(ConfigError::ValidationError(
                "debounce_ms cannot exceed 10000".into(),
            ));
        }

        if self.translator.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be positive".into(),
            ));
        }

        if !self.translator.endpoint.starts_with("http://")
            && !self.translator.endpoint.starts_with("https://")
        {
            return Err(ConfigError::ValidationError(
                "endpoint must be an http(s) URL".into(),
            ));
        }

        Ok(())
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        info!("Config saved to: {}", path.display());
        Ok(())
    }
}

/// Show current configuration
pub fn show() -> anyhow::Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    println!("Configuration file: {}", path.display());
    println!();
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Update configuration from CLI arguments and save
pub fn update(
    theme: Option<String>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    debounce_ms: Option<u64>,
) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(theme) = theme {
        let theme: Theme = theme.parse().map_err(anyhow::Error::msg)?;
        config.appearance.theme = theme;
        println!("Theme set to: {}", theme.display_name());
        changed = true;
    }

    if let Some(code) = source_lang {
        config.panel.source_lang = code;
        changed = true;
    }

    if let Some(code) = target_lang {
        config.panel.target_lang = code;
        changed = true;
    }

    if let Some(ms) = debounce_ms {
        config.panel.debounce_ms = ms;
        changed = true;
    }

    if changed {
        config.validate()?;
        config.save()?;
        println!("Configuration updated");
    } else {
        println!("Nothing to update (see `transly config --help`)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.panel.source_lang, "en");
        assert_eq!(config.panel.target_lang, "uz");
        assert_eq!(config.panel.debounce_ms, 250);
        assert_eq!(config.appearance.theme, Theme::Light);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.panel.source_lang, config.panel.source_lang);
        assert_eq!(parsed.appearance.theme, config.appearance.theme);
        assert_eq!(parsed.translator.endpoint, config.translator.endpoint);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.panel.debounce_ms, 250);
        assert_eq!(parsed.appearance.theme, Theme::Light);
    }

    #[test]
    fn test_validate_rejects_unknown_language() {
        let mut config = Config::default();
        config.panel.source_lang = "xx".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.translator.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.translator.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("auto".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_flipped_is_involution() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.panel.source_lang, "en");
    }
}
