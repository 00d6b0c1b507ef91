//! HTTP product store backed by a remote REST collection.
//!
//! Wraps `reqwest` with catalog-specific query construction and error
//! mapping. The collection endpoint accepts `category` (equality on the
//! canonical slug), `search` (server-side text search), `order`, and `limit`
//! parameters and returns an array of raw product records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use wrap_commerce::search::SortKey;
use wrap_commerce::Product;

use crate::record::RawProductRecord;
use crate::store::{ProductQuery, ProductStore};
use crate::LoadError;

/// Client for a remote product collection.
///
/// Use [`RestProductStore::new`] against the configured backend endpoint, or
/// point `base_url` at a mock server in tests.
pub struct RestProductStore {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl RestProductStore {
    /// Create a store for the collection rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Backend`] if the HTTP client cannot be built or
    /// the base URL is invalid.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("wrap-wizard/0.1 (catalog)")
            .build()
            .map_err(|e| LoadError::Backend(e.to_string()))?;

        // Ensure the base URL ends with exactly one slash so join() appends
        // to the path rather than replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| LoadError::Backend(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: None,
        })
    }

    /// Attach an API key sent as the `X-Api-Key` header.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn products_url(&self, query: &ProductQuery) -> Result<Url, LoadError> {
        let mut url = self
            .base_url
            .join("products")
            .map_err(|e| LoadError::Backend(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(category) = &query.category {
                pairs.append_pair("category", category);
            }
            if let Some(search) = &query.search {
                pairs.append_pair("search", search);
            }
            pairs.append_pair("order", order_param(query.sort));
            pairs.append_pair("limit", &query.limit.to_string());
        }

        Ok(url)
    }
}

/// Server-side ordering for a sort key. Price sorts and relevance fall back
/// to creation time descending, the stable base order: best price is derived
/// from the offers relation and cannot be ordered by the collection endpoint.
fn order_param(sort: SortKey) -> &'static str {
    match sort {
        SortKey::NameAsc => "name.asc",
        SortKey::RatingDesc => "rating.desc",
        SortKey::Relevance | SortKey::PriceAsc | SortKey::PriceDesc => "created_at.desc",
    }
}

fn map_request_error(e: reqwest::Error) -> LoadError {
    if e.is_timeout() {
        LoadError::Timeout(e.to_string())
    } else if e.is_connect() {
        LoadError::Connection(e.to_string())
    } else {
        LoadError::Backend(e.to_string())
    }
}

#[async_trait]
impl ProductStore for RestProductStore {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, LoadError> {
        let url = self.products_url(query)?;

        let mut request = self.client.get(url.clone());
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await.map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let records: Vec<RawProductRecord> = response
            .json()
            .await
            .map_err(|e| LoadError::Deserialize(e.to_string()))?;

        tracing::debug!(count = records.len(), url = %url, "fetched product records");

        Ok(records
            .into_iter()
            .map(RawProductRecord::into_product)
            .collect())
    }
}
