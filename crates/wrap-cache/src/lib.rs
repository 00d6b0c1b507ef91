//! Key-value store capability and TTL snapshot caching for Wrap Wizard.
//!
//! Browser-local persistent state (product snapshots, chat history,
//! anonymous favorites) is modeled as an injected [`KeyValueStore`]
//! capability so it can be swapped for an in-memory fake in tests. On top of
//! it, [`SnapshotCache`] provides the single-slot, bounded-lifetime snapshot
//! used to seed the catalog before the first network round-trip.
//!
//! Caching is best-effort everywhere: a store that throws degrades to
//! cache-miss behavior and is only logged.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use wrap_cache::{MemoryStore, SnapshotCache};
//!
//! let store = Arc::new(MemoryStore::new());
//! let cache: SnapshotCache<Vec<String>> =
//!     SnapshotCache::new(store, "recent_searches", Duration::from_secs(300));
//!
//! cache.write(&vec!["burn gel".to_string()]);
//! let seeded = cache.read();
//! ```

mod error;
mod kv;
mod snapshot;

pub use error::CacheError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::SnapshotCache;
