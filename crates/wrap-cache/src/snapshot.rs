//! Single-slot snapshot caching with a bounded lifetime.

use crate::{CacheError, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The wire shape of a cached slot.
#[derive(Serialize, Deserialize)]
struct CacheEntry<T> {
    data: T,
    /// Write time in epoch milliseconds.
    timestamp: u64,
}

/// A single-slot cache for one value under one fixed key.
///
/// `read` returns the cached value only while it is younger than the TTL;
/// a stale entry is ignored in place, not deleted. `write` always overwrites
/// the slot with a fresh timestamp. Both operations degrade silently to
/// cache-miss behavior when the underlying store fails.
pub struct SnapshotCache<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    ttl: Duration,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> SnapshotCache<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            key: key.into(),
            ttl,
            _marker: PhantomData,
        }
    }

    /// Read the cached value if present and fresh.
    pub fn read(&self) -> Option<T> {
        self.read_at(now_ms())
    }

    /// Read the cached value as of `now_ms`. Deterministic seam for tests.
    pub fn read_at(&self, now_ms: u64) -> Option<T> {
        match self.try_read_at(now_ms) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Overwrite the slot with `value` at the current time.
    pub fn write(&self, value: &T) {
        self.write_at(value, now_ms());
    }

    /// Overwrite the slot as of `now_ms`. Deterministic seam for tests.
    pub fn write_at(&self, value: &T, now_ms: u64) {
        if let Err(e) = self.try_write_at(value, now_ms) {
            tracing::warn!(key = %self.key, error = %e, "cache write failed, continuing without cache");
        }
    }

    fn try_read_at(&self, now_ms: u64) -> Result<Option<T>, CacheError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let entry: CacheEntry<T> = serde_json::from_str(&raw)?;
        if now_ms.saturating_sub(entry.timestamp) < self.ttl.as_millis() as u64 {
            Ok(Some(entry.data))
        } else {
            // Stale: behave as if absent, leave the entry in place.
            Ok(None)
        }
    }

    fn try_write_at(&self, value: &T, now_ms: u64) -> Result<(), CacheError> {
        let raw = serde_json::to_string(&CacheEntry {
            data: value,
            timestamp: now_ms,
        })?;
        self.store.set(&self.key, &raw)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
