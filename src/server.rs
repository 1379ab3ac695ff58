use crate::catalog::store::CatalogHandle;
use crate::search::handlers::{SearchSettings, handle_search, handle_stats};
use axum::extract::Extension;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_STATS: &str = "/stats";

pub fn build_router(catalog: Arc<CatalogHandle>, settings: SearchSettings) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, post(handle_search))
        .route(ENDPOINT_STATS, get(handle_stats))
        .layer(Extension(catalog))
        .layer(Extension(Arc::new(settings)))
}
