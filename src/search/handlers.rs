use super::engine::{group_by_shop, search};
use super::types::SearchResponse;
use super::validation::validate_search_request;
use crate::catalog::store::CatalogHandle;
use crate::catalog::types::CatalogStats;
use crate::error::ApiError;
use axum::body::Bytes;
use axum::{Extension, Json};
use std::sync::Arc;

/// Search policy shared by the handlers.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub max_radius: f64,
}

pub async fn handle_search(
    Extension(catalog): Extension<Arc<CatalogHandle>>,
    Extension(settings): Extension<Arc<SearchSettings>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = validate_search_request(&body, settings.max_radius)?;

    let snapshot = catalog.snapshot().await;
    let results = search(&snapshot, &query);
    tracing::debug!("Search returned {} products", results.len());

    Ok(Json(SearchResponse {
        shops: group_by_shop(results),
    }))
}

pub async fn handle_stats(
    Extension(catalog): Extension<Arc<CatalogHandle>>,
) -> Json<CatalogStats> {
    Json(catalog.snapshot().await.stats())
}
