use super::geo::is_valid_coordinate;
use super::loader;
use super::types::*;
use crate::error::LoadError;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Immutable collection of shops keyed by identifier.
///
/// Built in a single [`Catalog::load`] pass and never mutated afterwards; a new
/// dataset means a new `Catalog`, published through [`CatalogHandle`].
#[derive(Debug, Default)]
pub struct Catalog {
    shops: HashMap<String, Shop>,
}

impl Catalog {
    /// Builds a catalog from typed load records.
    ///
    /// Taggings referencing an unknown shop or tag, and products referencing an
    /// unknown shop, are dropped. Invalid shop coordinates abort the whole load.
    pub fn load(
        shop_records: Vec<ShopRecord>,
        tag_records: Vec<TagRecord>,
        tagging_records: Vec<TaggingRecord>,
        product_records: Vec<ProductRecord>,
    ) -> Result<Self, LoadError> {
        let mut shops = HashMap::with_capacity(shop_records.len());
        for record in shop_records {
            if !is_valid_coordinate(record.lat, record.lng) {
                return Err(LoadError::InvalidCoordinate {
                    shop_id: record.id,
                    lat: record.lat,
                    lng: record.lng,
                });
            }
            shops.insert(
                record.id.clone(),
                Shop::new(record.id, record.name, record.lat, record.lng),
            );
        }

        let tags: HashMap<String, String> = tag_records
            .into_iter()
            .map(|record| (record.id, record.tag))
            .collect();

        let mut dropped_taggings = 0usize;
        for record in tagging_records {
            match (shops.get_mut(&record.shop_id), tags.get(&record.tag_id)) {
                (Some(shop), Some(tag)) => shop.add_tag(tag.as_str()),
                _ => dropped_taggings += 1,
            }
        }

        let mut dropped_products = 0usize;
        for record in product_records {
            if !record.popularity.is_finite() {
                return Err(LoadError::InvalidPopularity {
                    product_id: record.id,
                    popularity: record.popularity,
                });
            }
            match shops.get_mut(&record.shop_id) {
                Some(shop) => shop.add_product(Product::from(record)),
                None => dropped_products += 1,
            }
        }

        let catalog = Self { shops };
        let stats = catalog.stats();
        tracing::info!(
            "Catalog loaded: {} shops, {} products, {} tagged shops",
            stats.shops,
            stats.products,
            stats.tagged_shops
        );
        if dropped_taggings > 0 || dropped_products > 0 {
            tracing::warn!(
                "Dropped {} taggings and {} products with unresolved references",
                dropped_taggings,
                dropped_products
            );
        }

        Ok(catalog)
    }

    pub fn shops(&self) -> impl Iterator<Item = &Shop> {
        self.shops.values()
    }

    pub fn get(&self, shop_id: &str) -> Option<&Shop> {
        self.shops.get(shop_id)
    }

    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            shops: self.shops.len(),
            products: self.shops.values().map(|shop| shop.products().len()).sum(),
            tagged_shops: self
                .shops
                .values()
                .filter(|shop| !shop.tags().is_empty())
                .count(),
        }
    }
}

/// The latest successfully loaded catalog, swappable as a whole.
///
/// Readers take an `Arc` snapshot and keep it for the duration of a query, so a
/// concurrent [`publish`](Self::publish) never exposes a mix of two datasets.
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub async fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().await.clone()
    }

    pub async fn publish(&self, catalog: Catalog) {
        let catalog = Arc::new(catalog);
        *self.current.write().await = catalog;
    }

    /// Loads the dataset under `dir` on the blocking pool and publishes it.
    ///
    /// On error nothing is published and the current catalog stays visible.
    pub async fn reload_from(&self, dir: &Path) -> Result<CatalogStats, LoadError> {
        let owned_dir = dir.to_path_buf();
        let catalog = match tokio::task::spawn_blocking(move || loader::load_dir(&owned_dir)).await {
            Ok(result) => result?,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => return Err(LoadError::Interrupted(err.to_string())),
        };
        let stats = catalog.stats();
        self.publish(catalog).await;
        tracing::info!("Published catalog from {}", dir.display());
        Ok(stats)
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
