use super::types::{GroupedProduct, ResultRecord, SearchQuery, ShopGroup};
use crate::catalog::store::Catalog;
use crate::catalog::types::{Product, Shop};
use std::collections::HashMap;

struct Candidate<'a> {
    product: &'a Product,
    shop: &'a Shop,
    distance: f64,
}

/// Returns the most popular products of shops strictly within `query.radius`
/// meters that carry any of the requested tags.
///
/// Each shop contributes at most `query.count` products, and the pooled list is
/// ranked by popularity (descending), then distance, then product id, and cut to
/// `query.count` entries.
pub fn search(catalog: &Catalog, query: &SearchQuery) -> Vec<ResultRecord> {
    let relevant_shops: Vec<(&Shop, f64)> = catalog
        .shops()
        .filter_map(|shop| {
            let distance = shop.distance(query.lat, query.lng);
            (distance < query.radius && shop.has_any_tag(&query.tags)).then_some((shop, distance))
        })
        .collect();

    let mut candidates: Vec<Candidate<'_>> = relevant_shops
        .iter()
        .flat_map(|&(shop, distance)| {
            shop.products()
                .iter()
                .take(query.count)
                .map(move |product| Candidate {
                    product,
                    shop,
                    distance,
                })
        })
        .collect();

    tracing::debug!(
        "Search at ({}, {}) r={}m: {} shops, {} candidates",
        query.lat,
        query.lng,
        query.radius,
        relevant_shops.len(),
        candidates.len()
    );

    candidates.sort_by(|a, b| {
        b.product
            .popularity
            .total_cmp(&a.product.popularity)
            .then_with(|| a.distance.total_cmp(&b.distance))
            .then_with(|| a.product.product_id.cmp(&b.product.product_id))
    });

    candidates
        .into_iter()
        .take(query.count)
        .map(|candidate| ResultRecord {
            product_id: candidate.product.product_id.clone(),
            product_title: candidate.product.title.clone(),
            product_popularity: candidate.product.popularity,
            product_quantity: candidate.product.quantity,
            shop_id: candidate.shop.shop_id.clone(),
            shop_name: candidate.shop.name.clone(),
            shop_tags: query.tags.clone(),
            lat: candidate.shop.lat,
            lng: candidate.shop.lng,
            distance: candidate.distance,
        })
        .collect()
}

/// Groups ranked results by shop, keeping shops in first-seen order and each
/// shop's products in ranked order.
pub fn group_by_shop(records: Vec<ResultRecord>) -> Vec<ShopGroup> {
    let mut groups: Vec<ShopGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let idx = *positions.entry(record.shop_id).or_insert_with(|| {
            groups.push(ShopGroup {
                name: record.shop_name,
                lat: record.lat,
                lng: record.lng,
                distance: record.distance,
                tags: record.shop_tags,
                products: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].products.push(GroupedProduct {
            title: record.product_title,
            popularity: record.product_popularity,
            quantity: record.product_quantity,
        });
    }

    groups
}
