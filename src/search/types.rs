use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// Validated search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub count: usize,
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    pub tags: Vec<String>,
}

impl SearchQuery {
    /// Builds a query, rejecting a negative `count` or non-finite numbers.
    ///
    /// `tags: None` and an empty list both mean "no tag filter".
    pub fn new(
        count: i64,
        lat: f64,
        lng: f64,
        radius: f64,
        tags: Option<Vec<String>>,
    ) -> Result<Self, SearchError> {
        let count = usize::try_from(count).map_err(|_| {
            SearchError::ContractViolation(format!("result count must be non-negative, got {count}"))
        })?;
        if !(lat.is_finite() && lng.is_finite() && !radius.is_nan()) {
            return Err(SearchError::ContractViolation(
                "query coordinates and radius must be numbers".to_string(),
            ));
        }

        Ok(Self {
            count,
            lat,
            lng,
            radius,
            tags: tags.unwrap_or_default(),
        })
    }
}

/// One ranked product with its shop context.
///
/// `shop_tags` echoes the tag filter of the query, not the shop's own tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub product_id: String,
    pub product_title: String,
    pub product_popularity: f64,
    pub product_quantity: i64,
    pub shop_id: String,
    pub shop_name: String,
    pub shop_tags: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedProduct {
    pub title: String,
    pub popularity: f64,
    pub quantity: i64,
}

/// Results for a single shop, in the order they were ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopGroup {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub distance: f64,
    pub tags: Vec<String>,
    pub products: Vec<GroupedProduct>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub shops: Vec<ShopGroup>,
}
