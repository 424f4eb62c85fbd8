//! Translation client for the external translation service.
//!
//! The service is treated as an opaque `translate(text, from, to) -> String`;
//! everything about how the translation is produced lives behind this module.

mod google;

pub use google::GoogleTranslator;

use thiserror::Error;

/// Translation-related errors.
///
/// The panel flattens all of these into a single display string, so the
/// variants exist for diagnostics, not for recovery.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response shape from translation service")]
    MalformedResponse,
}

/// Translation engine trait for different backends.
pub trait TranslationEngine: Send + Sync {
    /// Translate text from source to target language.
    fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> impl std::future::Future<Output = Result<String, TranslateError>> + Send;

    /// Check if a language pair is supported.
    fn supports_pair(&self, from: &str, to: &str) -> bool;

    /// Get the name of the translation engine.
    fn name(&self) -> &str;
}
