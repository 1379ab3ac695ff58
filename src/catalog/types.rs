//! Catalog Data Types
//!
//! Load records (the typed rows the catalog is built from) and the in-memory
//! entities they turn into.

use super::geo;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// --- Load records ---

/// One row of the shops table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// One row of the tags table: maps a tag identifier to its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: String,
    pub tag: String,
}

/// One row of the taggings table: associates a tag with a shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggingRecord {
    pub id: String,
    pub shop_id: String,
    pub tag_id: String,
}

/// One row of the products table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub shop_id: String,
    pub title: String,
    pub popularity: f64,
    pub quantity: i64,
}

// --- Entities ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub title: String,
    pub popularity: f64,
    pub quantity: i64,
}

impl Product {
    /// Shop-local ordering: most popular first, identifier breaks ties.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .popularity
            .total_cmp(&self.popularity)
            .then_with(|| self.product_id.cmp(&other.product_id))
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            product_id: record.id,
            title: record.title,
            popularity: record.popularity,
            quantity: record.quantity,
        }
    }
}

/// A shop with its products and tags.
///
/// `products` is kept sorted by [`Product::rank_cmp`] and `tags` ascending, both
/// maintained on every insert so the invariants hold at any observable point.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub shop_id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    products: Vec<Product>,
    tags: Vec<String>,
}

impl Shop {
    pub fn new(shop_id: String, name: String, lat: f64, lng: f64) -> Self {
        Self {
            shop_id,
            name,
            lat,
            lng,
            products: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Inserts a tag at its sorted position. Inserting a tag already present is a no-op.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if let Err(idx) = self.tags.binary_search(&tag) {
            self.tags.insert(idx, tag);
        }
    }

    /// Inserts a product after every product that ranks at or above it.
    pub fn add_product(&mut self, product: Product) {
        let idx = self
            .products
            .partition_point(|existing| existing.rank_cmp(&product) != Ordering::Greater);
        self.products.insert(idx, product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|probe| probe.as_str().cmp(tag))
            .is_ok()
    }

    /// True if the shop carries at least one of `tags`. An empty filter matches every shop.
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.is_empty() || tags.iter().any(|tag| self.has_tag(tag.as_ref()))
    }

    /// Great-circle distance in meters from the given point.
    pub fn distance(&self, lat: f64, lng: f64) -> f64 {
        geo::haversine_m(lat, lng, self.lat, self.lng)
    }
}

/// Summary counts of a loaded catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub shops: usize,
    pub products: usize,
    pub tagged_shops: usize,
}
