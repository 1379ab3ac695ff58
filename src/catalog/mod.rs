//! Catalog Store Module
//!
//! Owns the in-memory dataset: shops, their products and their tags.
//!
//! ## Lifecycle
//! - **Load**: a [`store::Catalog`] is built in one pass from typed load records
//!   (shops, tag definitions, taggings, products). Dangling references are dropped,
//!   malformed shop coordinates abort the load.
//! - **Publish**: the finished catalog is swapped into a [`store::CatalogHandle`].
//!   Readers hold an `Arc` snapshot per query and never see a half-built dataset.
//!
//! ## Submodules
//! - **`types`**: Load records and the `Shop`/`Product` entities with their sort invariants.
//! - **`store`**: The immutable catalog and its atomically replaceable handle.
//! - **`geo`**: Great-circle distance.
//! - **`loader`**: Reads a dataset directory of delimited tables.

pub mod geo;
pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;
