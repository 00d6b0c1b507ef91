//! Raw backend records and their normalization into the canonical shape.
//!
//! The two backend flavors disagree on field casing (`$id`/`$createdAt`
//! versus snake_case), on whether `features` is a native list or a delimited
//! string, and on whether offers are a relation or a flat
//! price/affiliate-link pair on the product row. All of that is absorbed
//! here so the rest of the pipeline only sees [`Product`].

use serde::Deserialize;
use wrap_commerce::{category, Offer, Product, ProductId};

/// Merchant name used when an offer is synthesized from the flat
/// price/affiliate-link pair (the link is an Amazon affiliate one).
const DEFAULT_MERCHANT: &str = "Amazon";

/// `features` as stored: either a native list or one delimited string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFeatures {
    List(Vec<String>),
    Delimited(String),
}

/// A raw offer row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOffer {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "lastUpdated")]
    pub last_updated: Option<String>,
}

/// Creation time as stored: RFC 3339 text or epoch seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCreatedAt {
    Seconds(i64),
    Text(String),
}

/// One product record as returned by either backend flavor.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProductRecord {
    #[serde(alias = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default, alias = "affiliateLink")]
    pub affiliate_link: Option<String>,
    #[serde(default)]
    pub features: Option<RawFeatures>,
    #[serde(default)]
    pub offers: Vec<RawOffer>,
    /// Flat price used when the backend has no offers relation.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, alias = "$createdAt", alias = "createdAt")]
    pub created_at: Option<RawCreatedAt>,
}

impl RawProductRecord {
    /// Normalize into the canonical [`Product`] shape.
    pub fn into_product(self) -> Product {
        let offers = if self.offers.is_empty() {
            match self.price {
                Some(price) => vec![Offer {
                    name: DEFAULT_MERCHANT.to_string(),
                    price,
                    url: self.affiliate_link.clone(),
                    last_updated: None,
                }],
                None => Vec::new(),
            }
        } else {
            self.offers
                .into_iter()
                .map(|o| Offer {
                    name: o.name,
                    price: o.price,
                    url: o.url,
                    last_updated: o.last_updated,
                })
                .collect()
        };

        Product {
            id: ProductId::new(self.id),
            name: self.name,
            category: category::canonicalize(&self.category),
            brand: self.brand,
            rating: self.rating,
            image_url: self.image_url,
            dimensions: self.dimensions,
            weight: self.weight,
            material: self.material,
            asin: self.asin,
            affiliate_link: self.affiliate_link,
            features: normalize_features(self.features),
            offers,
            created_at: parse_created_at(self.created_at),
        }
    }
}

/// Normalize `features` from either stored form into an ordered list.
///
/// The delimited form splits on commas, semicolons, and newlines; entries
/// are trimmed and empties dropped.
fn normalize_features(raw: Option<RawFeatures>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(RawFeatures::List(items)) => items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(RawFeatures::Delimited(text)) => text
            .split(|c| c == ',' || c == ';' || c == '\n')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

fn parse_created_at(raw: Option<RawCreatedAt>) -> i64 {
    match raw {
        None => 0,
        Some(RawCreatedAt::Seconds(secs)) => secs,
        Some(RawCreatedAt::Text(text)) => chrono::DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.timestamp())
            .unwrap_or(0),
    }
}
