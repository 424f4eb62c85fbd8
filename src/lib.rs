//! transly library exports for the binary and integration tests.

pub mod config;
pub mod languages;
pub mod panel;
pub mod theme;
pub mod translate;
pub mod tui;

// Re-export commonly used types for convenience
pub use config::{Config, Theme};
pub use panel::{Panel, Phase, TranslateRequest};
pub use theme::ThemeStore;
pub use translate::{GoogleTranslator, TranslateError, TranslationEngine};
