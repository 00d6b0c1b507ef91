//! In-memory product store for tests, demos, and offline development.

use async_trait::async_trait;
use wrap_commerce::Product;

use crate::store::{ProductQuery, ProductStore};
use crate::LoadError;

/// A product store serving a fixed list.
///
/// Applies the same query semantics as the remote collection: category
/// equality, optional text search, creation-time-descending base order, and
/// the page-size cap. Text search can be disabled to exercise the loader's
/// in-memory fallback path.
pub struct MemoryProductStore {
    products: Vec<Product>,
    text_search: bool,
}

impl MemoryProductStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            text_search: true,
        }
    }

    /// Simulate a backend without server-side text search.
    pub fn without_text_search(mut self) -> Self {
        self.text_search = false;
        self
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, LoadError> {
        let mut results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| match &query.category {
                Some(cat) => p.category == *cat,
                None => true,
            })
            .filter(|p| match (&query.search, self.text_search) {
                (Some(needle), true) => p.matches_search(needle),
                _ => true,
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        results.truncate(query.limit);
        Ok(results)
    }

    fn supports_text_search(&self) -> bool {
        self.text_search
    }
}
