//! Catalog screen pipeline for Wrap Wizard.
//!
//! Composes the snapshot cache, a product store, and the filter/sort engine
//! into the catalog screen's state machine:
//!
//! ```text
//! Idle(cached-or-empty) -> Loading -> { Loaded, Failed }
//! Failed -> Retrying -> { Loaded, Failed }   (at most 3 retries)
//! ```
//!
//! The controller owns all catalog state exclusively. Loads are fenced with
//! a monotonic sequence number so a late-arriving response for a superseded
//! query is discarded instead of clobbering newer data.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wrap_cache::FileStore;
//! use wrap_catalog::CatalogController;
//! use wrap_data::RestProductStore;
//!
//! let store = Arc::new(RestProductStore::new(&endpoint, 30)?);
//! let kv = Arc::new(FileStore::open(cache_dir)?);
//! let mut catalog = CatalogController::new(store, kv);
//!
//! catalog.set_category(Some("bandages"));
//! catalog.load().await;
//! let visible = catalog.visible(&favorites);
//! ```

mod controller;
mod retry;

pub use controller::{
    CatalogController, CatalogPhase, LoadTicket, CACHE_DURATION, PRODUCTS_CACHE_KEY,
};
pub use retry::{RetryController, MAX_RETRY_ATTEMPTS};
