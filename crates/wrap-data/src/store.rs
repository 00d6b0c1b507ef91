//! The product store abstraction.

use crate::LoadError;
use async_trait::async_trait;
use wrap_commerce::search::{CatalogQuery, SortKey};
use wrap_commerce::Product;

/// Result-size cap for a single product fetch.
pub const PAGE_SIZE_CAP: usize = 100;

/// The remote query the loader issues: the server-side-eligible filters
/// plus the page-size cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Free-text search, when the backend supports it.
    pub search: Option<String>,
    /// Equality filter on the canonical category slug.
    pub category: Option<String>,
    /// Requested ordering hint; stores fall back to creation time
    /// descending where they cannot express a key.
    pub sort: SortKey,
    /// Maximum records to return, clamped to [`PAGE_SIZE_CAP`].
    pub limit: usize,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self {
            search: None,
            category: None,
            sort: SortKey::Relevance,
            limit: PAGE_SIZE_CAP,
        }
    }

    /// Build the remote query for the current catalog state.
    pub fn from_catalog(query: &CatalogQuery) -> Self {
        let search = query.search.trim();
        Self {
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
            category: query.category.clone(),
            sort: query.sort,
            limit: PAGE_SIZE_CAP,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, PAGE_SIZE_CAP);
        self
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// A backend holding the product collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch products matching the query, normalized to the canonical shape,
    /// in creation-time-descending base order.
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, LoadError>;

    /// Whether this backend applies `search` itself. When `false`, the
    /// caller matches the text against name/brand/category/features in
    /// memory after the fetch.
    fn supports_text_search(&self) -> bool {
        true
    }
}
