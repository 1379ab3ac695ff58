//! Error Types
//!
//! Three families of failures, one per boundary:
//! - [`LoadError`]: building a catalog from bulk records failed. Fatal for that load;
//!   the previously published catalog stays in place.
//! - [`SearchError`]: a query was constructed with values the engine cannot honour.
//! - [`ApiError`]: a `/search` request was rejected before reaching the engine.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a catalog.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or is not valid delimited text.
    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row is shorter than the table's schema.
    #[error("{table}.csv line {line}: missing column \"{column}\"")]
    MissingColumn {
        table: &'static str,
        line: u64,
        column: &'static str,
    },

    /// A numeric field could not be parsed.
    #[error("{table}.csv line {line}: malformed {field} value \"{value}\"")]
    MalformedNumber {
        table: &'static str,
        line: u64,
        field: &'static str,
        value: String,
    },

    /// A shop's coordinates are not finite or outside valid degree ranges.
    #[error("shop {shop_id}: invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate { shop_id: String, lat: f64, lng: f64 },

    /// A product's popularity is NaN or infinite and cannot be ranked.
    #[error("product {product_id}: invalid popularity {popularity}")]
    InvalidPopularity { product_id: String, popularity: f64 },

    /// The background load task did not run to completion.
    #[error("catalog load interrupted: {0}")]
    Interrupted(String),
}

/// Failure while constructing a query.
#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

/// Rejection of a `/search` request.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Invalid input: missing request body.")]
    MissingBody,

    #[error("Invalid input: missing search parameter \"{0}\".")]
    MissingParameter(&'static str),

    #[error("Invalid input: invalid search parameter value.")]
    InvalidParameter,

    #[error("Invalid input: search radius cannot be larger than {0}m.")]
    RadiusTooLarge(f64),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected search request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(_: SearchError) -> Self {
        ApiError::InvalidParameter
    }
}
