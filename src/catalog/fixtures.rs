//! Reference dataset shared by unit tests: three shops around central Stockholm,
//! two tags, six products.

use super::store::Catalog;
use super::types::*;
use std::fs;
use std::path::Path;

/// Query point ~1.1 km from shop1 and shop2 and ~2.8 km from shop3.
pub const QUERY_LAT: f64 = 59.3329;
pub const QUERY_LNG: f64 = 18.0805;

pub fn shop_records() -> Vec<ShopRecord> {
    [
        ("shop1", "Shop 1", 59.3326, 18.0606),
        ("shop2", "Shop 2", 59.3332, 18.0997),
        ("shop3", "Shop 3", 59.3456, 18.1234),
    ]
    .into_iter()
    .map(|(id, name, lat, lng)| ShopRecord {
        id: id.to_string(),
        name: name.to_string(),
        lat,
        lng,
    })
    .collect()
}

pub fn tag_records() -> Vec<TagRecord> {
    vec![
        TagRecord {
            id: "tag1".to_string(),
            tag: "Tag 1".to_string(),
        },
        TagRecord {
            id: "tag2".to_string(),
            tag: "Tag 2".to_string(),
        },
    ]
}

pub fn tagging_records() -> Vec<TaggingRecord> {
    vec![
        TaggingRecord {
            id: "tagging1".to_string(),
            shop_id: "shop3".to_string(),
            tag_id: "tag1".to_string(),
        },
        TaggingRecord {
            id: "tagging2".to_string(),
            shop_id: "shop2".to_string(),
            tag_id: "tag2".to_string(),
        },
    ]
}

pub fn product_records() -> Vec<ProductRecord> {
    [
        ("product1", "shop1", "Product 1", 0.5, 5),
        ("product2", "shop1", "Product 2", 0.7, 1),
        ("product3", "shop2", "Product 3", 0.1, 2),
        ("product4", "shop2", "Product 4", 0.6, 3),
        ("product5", "shop3", "Product 5", 0.9, 1),
        ("product6", "shop3", "Product 6", 0.1, 10),
    ]
    .into_iter()
    .map(|(id, shop_id, title, popularity, quantity)| ProductRecord {
        id: id.to_string(),
        shop_id: shop_id.to_string(),
        title: title.to_string(),
        popularity,
        quantity,
    })
    .collect()
}

pub fn catalog() -> Catalog {
    Catalog::load(
        shop_records(),
        tag_records(),
        tagging_records(),
        product_records(),
    )
    .expect("reference dataset loads")
}

/// Writes the reference dataset as delimited tables into `dir`.
pub fn write_csv_dataset(dir: &Path) {
    fs::write(
        dir.join("shops.csv"),
        "id,name,lat,lng\n\
         shop1,Shop 1,59.3326,18.0606\n\
         shop2,Shop 2,59.3332,18.0997\n\
         shop3,Shop 3,59.3456,18.1234\n",
    )
    .unwrap();
    fs::write(dir.join("tags.csv"), "id,tag\ntag1,Tag 1\ntag2,Tag 2\n").unwrap();
    fs::write(
        dir.join("taggings.csv"),
        "id,shop_id,tag_id\ntagging1,shop3,tag1\ntagging2,shop2,tag2\n",
    )
    .unwrap();
    fs::write(
        dir.join("products.csv"),
        "id,shop_id,title,popularity,quantity\n\
         product1,shop1,Product 1,0.5,5\n\
         product2,shop1,Product 2,0.7,1\n\
         product3,shop2,Product 3,0.1,2\n\
         product4,shop2,Product 4,0.6,3\n\
         product5,shop3,Product 5,0.9,1\n\
         product6,shop3,Product 6,0.1,10\n",
    )
    .unwrap();
}
