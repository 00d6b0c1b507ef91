//! Product store access and record normalization for Wrap Wizard.
//!
//! The two backend-as-a-service flavors the storefront historically ran
//! against are collapsed behind one [`ProductStore`] trait, with the flavor
//! differences absorbed by field aliases in the raw-record layer. One
//! implementation is selected at composition time:
//!
//! - [`RestProductStore`]: queries a remote product collection over HTTP
//! - [`MemoryProductStore`]: serves a fixed list; used in tests and demos
//!
//! Raw records are normalized into the canonical
//! [`Product`](wrap_commerce::Product) shape: feature lists from either a
//! delimited string or a native list, offers defaulted from a flat
//! price/affiliate-link pair, and category names canonicalized.

mod error;
mod memory;
mod record;
mod rest;
mod store;

pub use error::LoadError;
pub use memory::MemoryProductStore;
pub use record::{RawCreatedAt, RawFeatures, RawOffer, RawProductRecord};
pub use rest::RestProductStore;
pub use store::{ProductQuery, ProductStore, PAGE_SIZE_CAP};
