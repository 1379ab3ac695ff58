use anyhow::Context;
use shop_search::catalog::store::CatalogHandle;
use shop_search::config::Config;
use shop_search::search::handlers::SearchSettings;
use shop_search::server::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting shop search on {}", config.bind_addr);
    tracing::info!("Max search radius: {}m", config.max_radius);

    // 1. Catalog:
    let catalog = std::sync::Arc::new(CatalogHandle::default());
    let stats = catalog
        .reload_from(&config.data_path)
        .await
        .with_context(|| format!("failed to load dataset from {}", config.data_path.display()))?;
    tracing::info!(
        "Serving {} shops with {} products",
        stats.shops,
        stats.products
    );

    // 2. HTTP Router:
    let app = build_router(
        catalog,
        SearchSettings {
            max_radius: config.max_radius,
        },
    );

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
