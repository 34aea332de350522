/// Configuration management for the FAQ service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Cache (Redis) configuration
    pub cache: CacheConfig,
    /// Translation backend configuration
    pub translator: TranslatorConfig,
    /// Language settings
    pub languages: LanguageConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Cache (Redis) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis URL
    pub url: String,
    /// TTL for translated-view snapshots, in seconds
    pub view_ttl_secs: u64,
}

/// Translation backend configuration (LibreTranslate-compatible HTTP API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Base URL of the translation API
    pub url: String,
    /// Optional API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Language settings: base language plus the closed set of supported codes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language the base question/answer fields are written in
    pub base: String,
    /// Languages every FAQ is translated into on write
    pub supported: Vec<String>,
}

const DEFAULT_SUPPORTED_LANGUAGES: &str = "en,es,fr,de,pt,hi,zh,ar,ru,ja";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("FAQ_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("FAQ_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8085),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/faqs".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            cache: CacheConfig {
                url: std::env::var("REDIS_URL")
                    .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
                view_ttl_secs: std::env::var("FAQ_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            },
            translator: TranslatorConfig {
                url: std::env::var("TRANSLATOR_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
                api_key: std::env::var("TRANSLATOR_API_KEY").ok().filter(|k| !k.is_empty()),
                timeout_secs: std::env::var("TRANSLATOR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            },
            languages: {
                let base = std::env::var("FAQ_BASE_LANGUAGE")
                    .unwrap_or_else(|_| "en".to_string())
                    .trim()
                    .to_ascii_lowercase();
                let supported = parse_language_list(
                    &std::env::var("FAQ_SUPPORTED_LANGUAGES")
                        .unwrap_or_else(|_| DEFAULT_SUPPORTED_LANGUAGES.to_string()),
                );

                if base.is_empty() {
                    return Err("FAQ_BASE_LANGUAGE cannot be empty".to_string());
                }
                if supported.is_empty() {
                    return Err("FAQ_SUPPORTED_LANGUAGES cannot be empty".to_string());
                }

                LanguageConfig { base, supported }
            },
        })
    }
}

/// Parse a comma-separated language list, normalizing case and dropping
/// blanks and duplicates while preserving order.
pub fn parse_language_list(raw: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_list_normalizes() {
        let langs = parse_language_list("en, ES ,fr,,de");
        assert_eq!(langs, vec!["en", "es", "fr", "de"]);
    }

    #[test]
    fn test_parse_language_list_dedupes_preserving_order() {
        let langs = parse_language_list("en,es,en,fr,es");
        assert_eq!(langs, vec!["en", "es", "fr"]);
    }

    #[test]
    fn test_default_supported_set_is_valid() {
        let langs = parse_language_list(DEFAULT_SUPPORTED_LANGUAGES);
        assert!(langs.contains(&"en".to_string()));
        assert_eq!(langs.len(), 10);
    }
}
