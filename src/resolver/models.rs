//! Signed-URL cache entries and statistics.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use std::time::Instant;

/// One cached signed URL. Entries are never mutated in place; re-resolution
/// after expiry replaces the entry wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The minted, time-limited display URL.
    pub resolved_url: String,
    /// Point past which the entry may no longer be served.
    pub expires_at: Instant,
}

impl CacheEntry {
    /// Whether the entry may still be served.
    pub fn is_live(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Statistics for resolver operations.
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    /// Number of resolutions served from the cache.
    pub hits: u64,
    /// Number of resolutions that missed the cache (or hit an expired entry).
    pub misses: u64,
    /// Number of newly minted and cached signed URLs.
    pub creates: u64,
    /// Number of resolutions that degraded to the original reference.
    pub fallbacks: u64,
}
