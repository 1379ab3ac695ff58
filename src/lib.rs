//! Shop Product Search Library
//!
//! Proximity-and-tag filtered product search over an in-memory catalog of shops.
//! The binary (`main.rs`) loads a dataset, publishes it and serves queries over HTTP.
//!
//! ## Modules
//! - **`catalog`**: The data model and the catalog store. Built once from bulk load
//!   records, read-only afterwards, replaced wholesale on reload.
//! - **`search`**: The query engine (distance filter, tag filter, popularity ranking)
//!   and its HTTP handlers.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Load, query and request error types.
//! - **`server`**: Router assembly.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
