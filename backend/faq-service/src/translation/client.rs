//! LibreTranslate-compatible HTTP API integration for text translation
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::metrics::faq::TRANSLATION_REQUEST_TOTAL;

/// Translation API client
pub struct TranslationClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// Request types
// ============================================

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

// ============================================
// Response types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateErrorResponse {
    error: String,
}

impl TranslationClient {
    /// Create a new translation client against `base_url`.
    pub fn new(base_url: String, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Check if a translation endpoint is configured
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    /// Translate `text` from `source` into `target`.
    ///
    /// One call per text; callers own the fan-out over languages and its
    /// all-or-nothing failure semantics.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TRANSLATION_REQUEST_TOTAL.with_label_values(&["error"]).inc();
                e
            })
            .context("Failed to call translation API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .ok()
                .and_then(|body| {
                    serde_json::from_str::<TranslateErrorResponse>(&body)
                        .map(|e| e.error)
                        .ok()
                        .or(Some(body))
                })
                .unwrap_or_default();
            error!(status = %status, error = %error_text, "Translation API request failed");
            TRANSLATION_REQUEST_TOTAL.with_label_values(&["error"]).inc();
            anyhow::bail!("Translation API error ({}): {}", status, error_text);
        }

        let translated: TranslateResponse = response
            .json()
            .await
            .map_err(|e| {
                TRANSLATION_REQUEST_TOTAL.with_label_values(&["error"]).inc();
                e
            })
            .context("Failed to parse translation API response")?;

        let elapsed = start.elapsed();
        debug!(
            target_lang = target,
            elapsed_ms = elapsed.as_millis(),
            "Translation API response received"
        );
        TRANSLATION_REQUEST_TOTAL
            .with_label_values(&["success"])
            .inc();

        Ok(translated.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_not_configured() {
        let client = TranslationClient::new(String::new(), None, 30);
        assert!(!client.is_configured());
    }

    #[test]
    fn test_client_configured() {
        let client = TranslationClient::new("http://localhost:5000".to_string(), None, 30);
        assert!(client.is_configured());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client =
            TranslationClient::new("http://localhost:5000/".to_string(), None, 30);
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_request_omits_absent_api_key() {
        let request = TranslateRequest {
            q: "Hello",
            source: "en",
            target: "es",
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"q": "Hello", "source": "en", "target": "es", "format": "text"})
        );
    }

    #[test]
    fn test_response_parses_camel_case() {
        let parsed: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": "Hola"}"#).unwrap();
        assert_eq!(parsed.translated_text, "Hola");
    }
}
