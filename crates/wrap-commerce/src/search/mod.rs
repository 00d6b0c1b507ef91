//! Catalog search state and the filter/sort engine.

mod engine;
mod filter;
mod query;

pub use engine::visible_products;
pub use filter::{FacetFilter, PriceRange};
pub use query::{CatalogQuery, SortKey};
