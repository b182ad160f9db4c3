//! In-process key/value cache with per-entry expiry.
//!
//! Holds values that are expensive to compute and may be served stale for a bounded time,
//! such as the phonedb growth chart URL. Entries are checked for expiry on read; expired
//! entries are dropped lazily. Concurrent writers to the same key simply overwrite each
//! other.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cached value with expiration timestamp.
#[derive(Clone)]
struct CachedValue {
    value: String,
    expires_at: Instant,
}

impl CachedValue {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Shared cache service.
///
/// Clones share the same underlying storage, so a single instance created at startup can
/// be handed to every request through `AppState`.
#[derive(Clone)]
pub struct CacheService {
    entries: Arc<RwLock<HashMap<String, CachedValue>>>,
}

impl CacheService {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets the value stored under `key` if it has not expired.
    ///
    /// # Returns
    /// - `Some(String)` - Cached value
    /// - `None` - No value stored, or the stored value has expired
    pub async fn get(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired; drop it unless another writer refreshed it meanwhile
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(CachedValue::is_expired) {
            entries.remove(key);
        }
        None
    }

    /// Stores `value` under `key` for `ttl`, replacing any previous value.
    pub async fn set(&self, key: &str, value: String, ttl: Duration) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), CachedValue::new(value, ttl));
    }

    /// Removes the value stored under `key`.
    ///
    /// Used in tests to force recomputation.
    #[cfg(test)]
    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new()
    }
}
