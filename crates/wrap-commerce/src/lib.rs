//! Catalog domain types and filter/sort logic for Wrap Wizard.
//!
//! This crate provides the pure, storage-free half of the catalog pipeline:
//!
//! - **Products**: the canonical product shape with offers and best-price
//!   derivation
//! - **Categories**: one canonical category table with display names and a
//!   legacy-name mapping
//! - **Search**: URL-backed query state, component-local facet state, and the
//!   filter/sort engine that computes the visible product list
//!
//! # Example
//!
//! ```rust,ignore
//! use wrap_commerce::prelude::*;
//!
//! let query = CatalogQuery::from_query_string("cat=bandages&sort=price_asc");
//! let facets = FacetFilter::default();
//! let favorites = Default::default();
//!
//! let visible = visible_products(&products, &query, &facets, &favorites);
//! ```

pub mod category;
pub mod ids;
pub mod product;
pub mod search;

pub use ids::ProductId;
pub use product::{Offer, Product};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::category::{canonicalize, display_name, CategoryDef, CATEGORIES};
    pub use crate::ids::ProductId;
    pub use crate::product::{Offer, Product};
    pub use crate::search::{
        visible_products, CatalogQuery, FacetFilter, PriceRange, SortKey,
    };
}
