// Signed-URL resolver - maps stored image references to display URLs
// Author: kelexine (https://github.com/kelexine)

use crate::config::{LimitsConfig, ResolverConfig};
use crate::media;
use crate::ratelimit::RateLimiter;
use crate::resolver::models::{CacheEntry, CacheStats};
use crate::storage::StorageClient;
use lru::LruCache;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Resolves stored image references to usable display URLs.
///
/// A reference is either an embedded data URI (returned as-is), a bare
/// storage path, or a legacy public-URL form. Paths are resolved through
/// the storage backend into time-limited signed URLs and cached so repeat
/// renders of the same photo cost zero backend calls.
///
/// Resolution never fails: any backend problem degrades to returning the
/// original reference so the UI can still attempt a direct load.
pub struct UrlResolver {
    storage: StorageClient,
    /// Normalized storage path → cached signed URL, LRU-bounded
    cache: Arc<Mutex<LruCache<String, CacheEntry>>>,
    stats: Arc<Mutex<CacheStats>>,
    limiter: RateLimiter,
    cache_ttl: Duration,
}

impl UrlResolver {
    /// Create a new resolver owning its cache.
    ///
    /// The caller is responsible for keeping `cache_ttl_seconds` below the
    /// backend validity window; `AppConfig::validate` enforces this for
    /// config-driven construction.
    pub fn new(storage: StorageClient, config: &ResolverConfig, limits: &LimitsConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            storage,
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            stats: Arc::new(Mutex::new(CacheStats::default())),
            limiter: RateLimiter::new(limits.signing_per_minute, Duration::from_secs(60)),
            cache_ttl: Duration::from_secs(config.cache_ttl_seconds),
        }
    }

    /// Resolve one reference to a display URL.
    ///
    /// Embedded references come back unchanged and untouched by the cache.
    /// Everything else is normalized to its storage path, served from the
    /// cache when a live entry exists, and otherwise resolved through the
    /// backend. Failures fall back to the original reference.
    pub async fn resolve(&self, reference: &str) -> String {
        if media::is_embedded(reference) {
            return reference.to_string();
        }

        // Cache key is the normalized path, so the legacy public-URL form
        // and the bare path of the same object share one entry.
        let path = normalize_storage_path(reference).to_string();

        if let Some(url) = self.lookup(&path) {
            debug!("Cache hit for {}", path);
            self.stats.lock().hits += 1;
            return url;
        }

        debug!("Cache miss for {}", path);
        self.stats.lock().misses += 1;

        if !self.limiter.try_acquire() {
            warn!("Signed URL mint rate limit reached, serving unresolved reference");
            self.stats.lock().fallbacks += 1;
            return reference.to_string();
        }

        match self.storage.create_signed_url(&path).await {
            Ok(resolved_url) => {
                let entry = CacheEntry {
                    resolved_url: resolved_url.clone(),
                    expires_at: Instant::now() + self.cache_ttl,
                };
                self.cache.lock().put(path, entry);
                self.stats.lock().creates += 1;
                resolved_url
            }
            Err(e) => {
                // Degrade instead of raising; the UI can still try the
                // reference directly.
                warn!("Signed URL mint failed for {}: {}", path, e);
                self.stats.lock().fallbacks += 1;
                reference.to_string()
            }
        }
    }

    /// Resolve a batch of references concurrently.
    ///
    /// Backend calls fan out and the result map is returned once every
    /// member settles. A failing member degrades to its original reference
    /// without affecting siblings. Keys are the references as given.
    pub async fn resolve_many<I, S>(&self, references: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolutions = references.into_iter().map(|reference| async move {
            let key = reference.as_ref().to_string();
            let url = self.resolve(reference.as_ref()).await;
            (key, url)
        });

        futures::future::join_all(resolutions).await.into_iter().collect()
    }

    /// Serve a live cache entry; expired entries are dropped on sight.
    fn lookup(&self, path: &str) -> Option<String> {
        let mut cache = self.cache.lock();
        match cache.get(path) {
            Some(entry) if entry.is_live() => Some(entry.resolved_url.clone()),
            Some(_) => {
                cache.pop(path);
                None
            }
            None => None,
        }
    }

    /// Get resolver statistics
    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }

    /// Number of entries currently cached (live or awaiting expiry-on-read)
    pub fn cached_entries(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.cache.lock().clear();
        debug!("Resolver cache cleared");
    }
}

/// Reduce a reference to its bucket-relative storage path.
///
/// Legacy public-URL forms look like
/// `https://<host>/storage/v1/object/public/<bucket>/<rest>`; the backend
/// wants `<rest>`. Anything without the public marker is already a path
/// and is used as-is.
pub fn normalize_storage_path(reference: &str) -> &str {
    match reference.split_once("/object/public/") {
        Some((_, bucket_and_path)) => match bucket_and_path.split_once('/') {
            Some((_bucket, path)) => path,
            None => bucket_and_path,
        },
        None => reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_legacy_public_url() {
        assert_eq!(
            normalize_storage_path("https://x.example/storage/v1/object/public/captures/u1/img.jpg"),
            "u1/img.jpg"
        );
    }

    #[test]
    fn test_normalize_nested_path() {
        assert_eq!(
            normalize_storage_path("https://x.example/storage/v1/object/public/captures/u1/2026/08/img.jpg"),
            "u1/2026/08/img.jpg"
        );
    }

    #[test]
    fn test_bare_path_passes_through() {
        assert_eq!(normalize_storage_path("u1/img.jpg"), "u1/img.jpg");
    }

    #[test]
    fn test_marker_without_object_path() {
        // Degenerate legacy URL with only a bucket after the marker
        assert_eq!(
            normalize_storage_path("https://x.example/storage/v1/object/public/captures"),
            "captures"
        );
    }

    #[test]
    fn test_cache_entry_expiry() {
        let live = CacheEntry {
            resolved_url: "https://x.example/signed".to_string(),
            expires_at: Instant::now() + Duration::from_secs(60),
        };
        assert!(live.is_live());

        let expired = CacheEntry {
            resolved_url: "https://x.example/signed".to_string(),
            expires_at: Instant::now() - Duration::from_secs(1),
        };
        assert!(!expired.is_live());
    }
}
