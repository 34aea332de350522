/// Translation layer
///
/// HTTP client for a LibreTranslate-compatible machine-translation API.
/// The per-record fan-out over the supported-language set lives in the
/// service layer.
pub mod client;

pub use client::TranslationClient;
