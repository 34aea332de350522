use redis::{aio::ConnectionManager, AsyncCommands};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::metrics::faq::{FAQ_CACHE_EVENTS, FAQ_CACHE_WRITE_TOTAL};
use crate::models::FaqView;

const VIEW_KEY_PREFIX: &str = "faqs:v1:";

/// Bounds for the SCAN-based invalidation walk. The namespace holds one key
/// per language, so these are generous.
const SCAN_COUNT: u32 = 100;
const SCAN_MAX_ITERATIONS: usize = 1000;

/// Translated-view cache backed by Redis.
///
/// Entries are per-language snapshots of the full FAQ list. Any content
/// mutation clears the whole namespace rather than tracking which languages
/// were affected.
#[derive(Clone)]
pub struct FaqCache {
    redis: ConnectionManager,
    default_ttl: Duration,
}

impl FaqCache {
    pub fn new(redis: ConnectionManager, default_ttl_secs: u64) -> Self {
        Self {
            redis,
            default_ttl: Duration::from_secs(default_ttl_secs),
        }
    }

    fn view_key(lang: &str) -> String {
        format!("{}{}", VIEW_KEY_PREFIX, lang)
    }

    /// Fetch the cached view for `lang`, if present and unexpired.
    /// Expiry is enforced by the Redis TTL set on write.
    pub async fn get_view(&self, lang: &str) -> Result<Option<Vec<FaqView>>> {
        let key = Self::view_key(lang);
        let mut conn = self.redis.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(data)) => match serde_json::from_str::<Vec<FaqView>>(&data) {
                Ok(views) => {
                    debug!("FAQ cache HIT for language {}", lang);
                    FAQ_CACHE_EVENTS.with_label_values(&["hit"]).inc();
                    Ok(Some(views))
                }
                Err(e) => {
                    // Corrupt payload; treat as a miss so the read path recomputes.
                    warn!("Failed to deserialize cached FAQ view for {}: {}", lang, e);
                    FAQ_CACHE_EVENTS.with_label_values(&["error"]).inc();
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("FAQ cache MISS for language {}", lang);
                FAQ_CACHE_EVENTS.with_label_values(&["miss"]).inc();
                Ok(None)
            }
            Err(e) => {
                warn!("Redis read error for FAQ cache: {}", e);
                FAQ_CACHE_EVENTS.with_label_values(&["error"]).inc();
                Err(AppError::CacheError(e.to_string()))
            }
        }
    }

    /// Store the view for `lang`, overwriting any prior entry, with the
    /// fixed TTL (or an explicit override).
    pub async fn put_view(
        &self,
        lang: &str,
        views: &[FaqView],
        ttl_secs: Option<u64>,
    ) -> Result<()> {
        let key = Self::view_key(lang);
        let ttl = ttl_secs
            .map(Duration::from_secs)
            .unwrap_or(self.default_ttl);

        let data = serde_json::to_string(views).map_err(|e| {
            AppError::Internal(format!("Cache serialization error: {}", e))
        })?;

        let mut conn = self.redis.clone();
        conn.set_ex::<_, _, ()>(&key, data, ttl.as_secs())
            .await
            .map_err(|e| {
                warn!("Failed to write FAQ cache: {}", e);
                FAQ_CACHE_WRITE_TOTAL.with_label_values(&["error"]).inc();
                AppError::CacheError(e.to_string())
            })?;

        debug!(
            "FAQ cache WRITE for language {} ({} entries) with TTL {:?}",
            lang,
            views.len(),
            ttl
        );
        FAQ_CACHE_WRITE_TOTAL.with_label_values(&["success"]).inc();

        Ok(())
    }

    /// Remove every per-language snapshot in the namespace.
    ///
    /// Uses cursor-based SCAN with MATCH instead of KEYS — KEYS blocks the
    /// whole Redis instance. Returns the number of keys removed.
    pub async fn invalidate_all(&self) -> Result<u64> {
        let pattern = format!("{}*", VIEW_KEY_PREFIX);
        let mut conn = self.redis.clone();

        let mut cursor: u64 = 0;
        let mut all_keys: Vec<String> = Vec::new();
        let mut iterations: usize = 0;

        loop {
            iterations += 1;
            if iterations > SCAN_MAX_ITERATIONS {
                warn!(
                    "SCAN aborted early: iterations={}, collected_keys={}, pattern={}",
                    iterations,
                    all_keys.len(),
                    pattern
                );
                break;
            }

            let (next_cursor, batch_keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_COUNT)
                .query_async::<_, (u64, Vec<String>)>(&mut conn)
                .await
                .map_err(AppError::from)?;

            all_keys.extend(batch_keys);

            if next_cursor == 0 {
                break;
            }
            cursor = next_cursor;
        }

        let mut deleted: u64 = 0;
        if !all_keys.is_empty() {
            for chunk in all_keys.chunks(1000) {
                let removed: u64 = redis::cmd("DEL")
                    .arg(chunk)
                    .query_async::<_, u64>(&mut conn)
                    .await
                    .map_err(AppError::from)?;
                deleted += removed;
            }
        }

        debug!(
            "FAQ cache INVALIDATE ALL removed {} entries for pattern {}",
            deleted, pattern
        );

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_key_format() {
        assert_eq!(FaqCache::view_key("en"), "faqs:v1:en");
        assert_eq!(FaqCache::view_key("zh"), "faqs:v1:zh");
    }

    #[test]
    fn test_view_key_is_namespaced() {
        assert!(FaqCache::view_key("es").starts_with(VIEW_KEY_PREFIX));
    }
}
