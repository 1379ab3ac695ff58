//! Search Service Module
//!
//! Answers "most popular products near a point" queries against the current
//! catalog snapshot.
//!
//! ## Pipeline
//! 1. **Distance filter**: keep shops strictly closer than the requested radius.
//! 2. **Tag filter**: keep shops carrying any requested tag (no tags = no filter).
//! 3. **Per-shop trim**: take each shop's top `count` products.
//! 4. **Ranking**: popularity descending, then distance, then capped to `count`.
//! 5. **Grouping**: results are regrouped by shop for the HTTP response.
//!
//! ## Submodules
//! - **`engine`**: Filtering, ranking and grouping.
//! - **`validation`**: Request body checks and coercion.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Query, result and response types.

pub mod engine;
pub mod handlers;
pub mod types;
pub mod validation;
