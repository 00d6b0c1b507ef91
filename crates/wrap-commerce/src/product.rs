//! Product and offer types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A retailer offer for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Retailer or merchant name.
    pub name: String,
    /// Offer price in the store currency.
    pub price: f64,
    /// Outbound link to the offer.
    pub url: Option<String>,
    /// When the offer was last refreshed (RFC 3339).
    pub last_updated: Option<String>,
}

impl Offer {
    /// Create an offer with just a merchant name and price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            url: None,
            last_updated: None,
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, assigned by the backing store.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Canonical category slug (open-ended set).
    pub category: String,
    /// Brand, used for brand-facet filtering.
    pub brand: String,
    /// Customer rating, 0-5. `None` means "no rating".
    pub rating: Option<f64>,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Physical dimensions, free-form.
    pub dimensions: Option<String>,
    /// Weight, free-form.
    pub weight: Option<String>,
    /// Material description.
    pub material: Option<String>,
    /// Amazon Standard Identification Number.
    pub asin: Option<String>,
    /// Affiliate link for the default merchant.
    pub affiliate_link: Option<String>,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
    /// Retailer offers; may be empty.
    pub offers: Vec<Offer>,
    /// Unix timestamp of creation, assigned by the backing store.
    pub created_at: i64,
}

impl Product {
    /// Create a minimal product. Descriptive fields start empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            rating: None,
            image_url: None,
            dimensions: None,
            weight: None,
            material: None,
            asin: None,
            affiliate_link: None,
            features: Vec::new(),
            offers: Vec::new(),
            created_at: 0,
        }
    }

    /// Best price across all offers, `None` when there are no offers.
    pub fn best_price(&self) -> Option<f64> {
        self.offers.iter().map(|o| o.price).reduce(f64::min)
    }

    /// Best price for sorting, where a product without offers sorts as 0.
    pub fn best_price_or_zero(&self) -> f64 {
        self.best_price().unwrap_or(0.0)
    }

    /// Case-insensitive text match against name, brand, category, and
    /// features. An empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.brand.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))
    }
}
