//! The catalog screen controller.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use wrap_cache::{KeyValueStore, SnapshotCache};
use wrap_commerce::search::{visible_products, CatalogQuery, FacetFilter, SortKey};
use wrap_commerce::{category, Product, ProductId};
use wrap_data::{LoadError, ProductQuery, ProductStore};

use crate::retry::RetryController;

/// Storage key for the product snapshot.
pub const PRODUCTS_CACHE_KEY: &str = "wrap_wizard_products_cache";

/// Snapshot lifetime.
pub const CACHE_DURATION: Duration = Duration::from_secs(5 * 60);

/// Where the catalog screen is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Before the first load; showing cached data when available.
    Idle,
    /// First load (or a parameter-driven refetch) in flight.
    Loading,
    /// The last load succeeded.
    Loaded,
    /// The last load failed.
    Failed,
    /// A manual retry in flight.
    Retrying,
}

/// Handle for one issued load, carrying its fencing sequence number.
///
/// A response resolved against a ticket that is no longer the latest issued
/// is discarded: out-of-order responses never clobber newer data.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    seq: u64,
    is_retry: bool,
}

/// Owns all state for the catalog screen: the loaded list, the URL-backed
/// query, client-side facets, load phase, and the retry budget.
pub struct CatalogController {
    store: Arc<dyn ProductStore>,
    cache: SnapshotCache<Vec<Product>>,
    query: CatalogQuery,
    facets: FacetFilter,
    products: Vec<Product>,
    phase: CatalogPhase,
    error: Option<String>,
    retry: RetryController,
    issued: u64,
    loaded_once: bool,
}

impl CatalogController {
    /// Create a controller, seeding the product list from the snapshot
    /// cache so the first paint is not empty when fresh cached data exists.
    pub fn new(store: Arc<dyn ProductStore>, kv: Arc<dyn KeyValueStore>) -> Self {
        let cache = SnapshotCache::new(kv, PRODUCTS_CACHE_KEY, CACHE_DURATION);
        let products = cache.read().unwrap_or_default();

        Self {
            store,
            cache,
            query: CatalogQuery::new(),
            facets: FacetFilter::new(),
            products,
            phase: CatalogPhase::Idle,
            error: None,
            retry: RetryController::new(),
            issued: 0,
            loaded_once: false,
        }
    }

    /// Start from URL-restored query state.
    pub fn with_query(mut self, query: CatalogQuery) -> Self {
        self.query = query;
        self
    }

    // --- accessors ---

    pub fn phase(&self) -> CatalogPhase {
        self.phase
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn facets(&self) -> &FacetFilter {
        &self.facets
    }

    /// Client-side facets; changing them only affects [`visible`](Self::visible).
    pub fn facets_mut(&mut self) -> &mut FacetFilter {
        &mut self.facets
    }

    /// First-load spinner flag.
    pub fn is_loading(&self) -> bool {
        self.phase == CatalogPhase::Loading
    }

    /// Retry spinner flag, distinct from the first-load spinner.
    pub fn is_retrying(&self) -> bool {
        self.phase == CatalogPhase::Retrying
    }

    pub fn retry_attempts(&self) -> u32 {
        self.retry.attempts()
    }

    /// Whether the retry affordance should be offered: the last load failed
    /// and the retry budget is not exhausted.
    pub fn can_retry(&self) -> bool {
        self.phase == CatalogPhase::Failed && self.retry.can_retry()
    }

    // --- query state (server-side-eligible; call `load` after changing) ---

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Select a category (canonicalized) or `None` for "all".
    pub fn set_category(&mut self, category_raw: Option<&str>) {
        self.query.category = category_raw
            .map(category::canonicalize)
            .filter(|c| c.as_str() != "all");
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// View-mode toggle; applied client-side, no refetch needed.
    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.query.favorites_only = favorites_only;
    }

    // --- loading ---

    /// Issue a load ticket. The newest ticket wins at resolution time.
    pub fn begin_load(&mut self, is_retry: bool) -> LoadTicket {
        self.issued += 1;
        self.phase = if is_retry {
            CatalogPhase::Retrying
        } else {
            CatalogPhase::Loading
        };
        LoadTicket {
            seq: self.issued,
            is_retry,
        }
    }

    /// Apply a load outcome. Returns `false` when the ticket was stale and
    /// the outcome was discarded.
    ///
    /// On success the list is replaced, the snapshot cache rewritten, the
    /// error cleared, and the retry budget reset. On failure the previously
    /// displayed list is preserved (stale-while-error), except on the very
    /// first non-retry load where it is cleared so no ghost data reaches the
    /// first paint.
    pub fn resolve_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Product>, LoadError>,
    ) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued,
                "discarding out-of-order load response"
            );
            return false;
        }

        match result {
            Ok(products) => {
                self.products = products;
                self.cache.write(&self.products);
                self.error = None;
                self.retry.reset();
                self.loaded_once = true;
                self.phase = CatalogPhase::Loaded;
            }
            Err(e) => {
                if !self.loaded_once && !ticket.is_retry {
                    self.products.clear();
                }
                self.error = Some(format!("Failed to load products: {e}"));
                self.phase = CatalogPhase::Failed;
            }
        }
        true
    }

    /// Fetch the product list for the current query state and apply it.
    ///
    /// Used for the initial load, parameter-driven refetches, and explicit
    /// refresh triggers alike.
    pub async fn load(&mut self) {
        let ticket = self.begin_load(false);
        let result = self.fetch().await;
        self.resolve_load(ticket, result);
    }

    /// Manually retry after a failure. Consumes one of the 3 retry
    /// attempts; returns `false` without loading when retrying is not
    /// currently allowed (no failure, request in flight, or budget spent).
    pub async fn retry(&mut self) -> bool {
        if !self.can_retry() || !self.retry.begin_attempt() {
            return false;
        }
        let ticket = self.begin_load(true);
        let result = self.fetch().await;
        self.resolve_load(ticket, result);
        true
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let query = ProductQuery::from_catalog(&self.query);
        let mut products = self.store.fetch_products(&query).await?;

        // Backends without server-side search return the unfiltered page;
        // match the text here instead.
        if !self.store.supports_text_search() {
            if let Some(needle) = &query.search {
                products.retain(|p| p.matches_search(needle));
            }
        }

        Ok(products)
    }

    // --- derived state ---

    /// The visible product list for the current filter state.
    pub fn visible(&self, favorites: &HashSet<ProductId>) -> Vec<&Product> {
        visible_products(&self.products, &self.query, &self.facets, favorites)
    }
}
