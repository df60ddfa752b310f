//! Time-to-live cache for derived results.
//!
//! Presentation-level results (dashboards, suggestion lists) can be reused for a short
//! while instead of being recomputed per request. The cache never reads the clock itself:
//! callers pass "now", which keeps expiry deterministic under a `FixedClock`.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use tokio::sync::RwLock;
use tracing::trace;

/// Longest TTL accepted; larger values are clamped (ten years).
const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// Key/value cache whose entries expire a fixed time after insertion
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Creates an empty cache whose entries live for `ttl_secs` seconds.
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        // Cast safety: clamped to MAX_TTL_SECS, well inside i64.
        #[allow(clippy::cast_possible_wrap)]
        let secs = ttl_secs.min(MAX_TTL_SECS) as i64;
        Self {
            ttl: Duration::seconds(secs),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value if present and not yet expired at `now`.
    pub async fn get(&self, key: &K, now: DateTime<Utc>) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    /// Stores `value`, replacing any previous entry for `key`.
    pub async fn insert(&self, key: K, value: V, now: DateTime<Utc>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Drops the entry for `key`. Returns whether there was one.
    pub async fn invalidate(&self, key: &K) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    /// Drops every entry expired at `now`. Returns how many were removed.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| now < entry.expires_at);
        let removed = before - entries.len();
        trace!(removed, remaining = entries.len(), "Purged expired cache entries");
        removed
    }

    /// Number of entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
