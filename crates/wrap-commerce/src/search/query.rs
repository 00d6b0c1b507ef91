//! URL-backed catalog query state.
//!
//! Search text, category, sort, and the favorites view mode live in the URL
//! (`q`, `cat`, `sort`, `favorites`) so filtered views are shareable. Facet
//! state that never triggers a refetch is kept separately in
//! [`FacetFilter`](crate::search::FacetFilter).

use serde::{Deserialize, Serialize};

/// Sort options for the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Preserve the server-provided order.
    #[default]
    Relevance,
    /// Best price, low to high.
    PriceAsc,
    /// Best price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Highest rated first.
    RatingDesc,
}

impl SortKey {
    /// Parse the URL `sort` parameter. Unknown values fall back to relevance.
    pub fn from_param(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "name_asc" => Self::NameAsc,
            "rating_desc" => Self::RatingDesc,
            _ => Self::Relevance,
        }
    }

    /// The URL parameter value for this key.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::RatingDesc => "rating_desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::NameAsc => "Name: A-Z",
            Self::RatingDesc => "Highest Rated",
        }
    }
}

/// The search-affecting filter state, durable in URL query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    /// Free-text search, matched against name/brand/category/features.
    pub search: String,
    /// Selected category slug; `None` means "all".
    pub category: Option<String>,
    /// Active sort key.
    pub sort: SortKey,
    /// Restrict to the favorites set.
    pub favorites_only: bool,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse catalog state from a URL query string.
    ///
    /// Unknown parameters are ignored; `cat=all` and an empty `cat` both mean
    /// no category restriction.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = Self::new();

        for pair in qs.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = percent_decode(value);

            match key {
                "q" => query.search = decoded,
                "cat" => {
                    let cat = crate::category::canonicalize(&decoded);
                    query.category = if cat.is_empty() || cat == "all" {
                        None
                    } else {
                        Some(cat)
                    };
                }
                "sort" => query.sort = SortKey::from_param(&decoded),
                "favorites" => query.favorites_only = decoded == "1" || decoded == "true",
                _ => {}
            }
        }

        query
    }

    /// Re-encode this state as a URL query string, omitting defaults.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if !self.search.trim().is_empty() {
            pairs.push(format!("q={}", percent_encode(self.search.trim())));
        }
        if let Some(cat) = &self.category {
            pairs.push(format!("cat={}", percent_encode(cat)));
        }
        if self.sort != SortKey::Relevance {
            pairs.push(format!("sort={}", self.sort.as_param()));
        }
        if self.favorites_only {
            pairs.push("favorites=1".to_string());
        }

        pairs.join("&")
    }

    /// Whether any category other than "all" is selected.
    pub fn has_category(&self) -> bool {
        self.category.is_some()
    }
}

/// Simple percent-decoding, treating `+` as space.
fn percent_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut bytes = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
                continue;
            }
            result.push_str(&String::from_utf8_lossy(&bytes));
            bytes.clear();
            result.push(c);
            result.push_str(&hex);
        } else {
            if !bytes.is_empty() {
                result.push_str(&String::from_utf8_lossy(&bytes));
                bytes.clear();
            }
            result.push(if c == '+' { ' ' } else { c });
        }
    }
    if !bytes.is_empty() {
        result.push_str(&String::from_utf8_lossy(&bytes));
    }

    result
}

/// Percent-encoding for query values: unreserved characters pass through,
/// spaces become `+`, everything else is escaped byte-wise.
fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            b' ' => result.push('+'),
            _ => result.push_str(&format!("%{:02X}", byte)),
        }
    }
    result
}
