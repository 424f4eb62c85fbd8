//! Google Translate (gtx) client.
//!
//! Issues an unauthenticated GET against the `translate_a/single` endpoint
//! and decodes the nested-array response. The contract this crate depends on
//! is that the first element of the first element of the first element is the
//! translated string; any substitute service must match that shape.

use super::{TranslateError, TranslationEngine};
use crate::languages;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the gtx translation endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a new translator against the given endpoint.
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

impl TranslationEngine for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, TranslateError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let params = [
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let start = std::time::Instant::now();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Status(response.status()));
        }

        let body: serde_json::Value = response.json().await?;
        let translated = first_alternative(&body)
            .ok_or(TranslateError::MalformedResponse)?
            .to_string();

        info!(
            "translation took {}ms ({} -> {}, {} chars)",
            start.elapsed().as_millis(),
            from,
            to,
            text.len()
        );
        debug!("translated: '{}' -> '{}'", text, translated);

        Ok(translated)
    }

    fn supports_pair(&self, from: &str, to: &str) -> bool {
        languages::is_supported(from) && languages::is_supported(to)
    }

    fn name(&self) -> &str {
        "google"
    }
}

/// Extract the first-alternative translation from the nested-array response.
fn first_alternative(body: &serde_json::Value) -> Option<&str> {
    body.get(0)?.get(0)?.get(0)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_canned_response() {
        let body = json!([[["salom", "hello", null, null, 1]]]);
        assert_eq!(first_alternative(&body), Some("salom"));
    }

    #[test]
    fn test_decode_takes_first_alternative_only() {
        let body = json!([[["salom", "hello", null, null, 1], ["dunyo", "world", null, null, 1]]]);
        assert_eq!(first_alternative(&body), Some("salom"));
    }

    #[test]
    fn test_decode_malformed_shapes() {
        assert_eq!(first_alternative(&json!(null)), None);
        assert_eq!(first_alternative(&json!([])), None);
        assert_eq!(first_alternative(&json!([[]])), None);
        assert_eq!(first_alternative(&json!([[[]]])), None);
        assert_eq!(first_alternative(&json!([[[42]]])), None);
        assert_eq!(first_alternative(&json!({"data": "salom"})), None);
    }

    #[test]
    fn test_translator_new() {
        let translator = GoogleTranslator::new("https://example.com/translate", 10);
        assert_eq!(translator.name(), "google");
        assert!(translator.supports_pair("en", "uz"));
        assert!(translator.supports_pair("en", "en"));
        assert!(!translator.supports_pair("en", "xyz"));
    }
}
