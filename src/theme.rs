//! Persisted theme store.
//!
//! Owns the two-valued theme setting. Reads the persisted value on open
//! (defaulting to light), and writes it back on every toggle. Persistence is
//! best-effort: a failed write leaves the in-memory value flipped.

use crate::config::{Config, ConfigError, Theme};
use std::path::PathBuf;

/// Store for the persisted theme setting.
#[derive(Debug)]
pub struct ThemeStore {
    config: Config,
    path: PathBuf,
}

impl ThemeStore {
    /// Open the store at the default config path.
    pub fn open() -> Result<Self, ConfigError> {
        Ok(Self::open_at(Config::config_path()?))
    }

    /// Open the store at an explicit path. A missing or unreadable file
    /// yields the default (light) theme.
    pub fn open_at(path: PathBuf) -> Self {
        let config = Config::load_from(&path).unwrap_or_default();
        Self { config, path }
    }

    /// The current theme.
    pub fn theme(&self) -> Theme {
        self.config.appearance.theme
    }

    /// Flip the theme and persist the new value.
    ///
    /// The flip always takes effect in memory; the write error (if any) is
    /// returned so the caller can log it.
    pub fn toggle(&mut self) -> Result<Theme, ConfigError> {
        self.config.appearance.theme = self.config.appearance.theme.flipped();
        let theme = self.config.appearance.theme;
        self.config.save_to(&self.path)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_light_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::open_at(dir.path().join("config.toml"));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ThemeStore::open_at(dir.path().join("config.toml"));
        let original = store.theme();

        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), original);
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut store = ThemeStore::open_at(path.clone());
        store.toggle().unwrap();
        assert_eq!(store.theme(), Theme::Dark);

        // A fresh read observes the persisted value.
        let reopened = ThemeStore::open_at(path);
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_survives_write_failure() {
        // Point the store at a path whose parent cannot be created.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let mut store = ThemeStore::open_at(blocker.join("config.toml"));

        assert!(store.toggle().is_err());
        assert_eq!(store.theme(), Theme::Dark);
    }
}
