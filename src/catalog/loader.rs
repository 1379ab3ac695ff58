//! Bulk Dataset Loader
//!
//! Reads the four delimited tables of a dataset directory and hands the typed
//! rows to [`Catalog::load`]:
//!
//! | file           | columns                                   |
//! |----------------|-------------------------------------------|
//! | `shops.csv`    | id, name, lat, lng                        |
//! | `tags.csv`     | id, tag                                   |
//! | `taggings.csv` | id, shop_id, tag_id                       |
//! | `products.csv` | id, shop_id, title, popularity, quantity  |
//!
//! Every file starts with a header row, which is skipped.

use super::store::Catalog;
use super::types::{ProductRecord, ShopRecord, TagRecord, TaggingRecord};
use crate::error::LoadError;

use csv::StringRecord;
use std::path::Path;
use std::str::FromStr;

pub const SHOPS_FILE: &str = "shops.csv";
pub const TAGS_FILE: &str = "tags.csv";
pub const TAGGINGS_FILE: &str = "taggings.csv";
pub const PRODUCTS_FILE: &str = "products.csv";

pub fn load_dir(dir: &Path) -> Result<Catalog, LoadError> {
    tracing::info!("Loading dataset from {}", dir.display());

    let shops = read_table(dir, SHOPS_FILE, "shops", parse_shop)?;
    let tags = read_table(dir, TAGS_FILE, "tags", parse_tag)?;
    let taggings = read_table(dir, TAGGINGS_FILE, "taggings", parse_tagging)?;
    let products = read_table(dir, PRODUCTS_FILE, "products", parse_product)?;

    Catalog::load(shops, tags, taggings, products)
}

/// One data row plus the context needed to report errors against it.
struct Row<'a> {
    table: &'static str,
    line: u64,
    record: &'a StringRecord,
}

impl Row<'_> {
    fn text(&self, idx: usize, column: &'static str) -> Result<String, LoadError> {
        self.record
            .get(idx)
            .map(str::to_string)
            .ok_or(LoadError::MissingColumn {
                table: self.table,
                line: self.line,
                column,
            })
    }

    fn number<T: FromStr>(&self, idx: usize, column: &'static str) -> Result<T, LoadError> {
        let raw = self.text(idx, column)?;
        raw.trim().parse().map_err(|_| LoadError::MalformedNumber {
            table: self.table,
            line: self.line,
            field: column,
            value: raw,
        })
    }

    /// Like [`number`](Self::number), but NaN and infinities are malformed too.
    fn real(&self, idx: usize, column: &'static str) -> Result<f64, LoadError> {
        let value: f64 = self.number(idx, column)?;
        if value.is_finite() {
            return Ok(value);
        }
        Err(LoadError::MalformedNumber {
            table: self.table,
            line: self.line,
            field: column,
            value: self.text(idx, column)?,
        })
    }
}

fn read_table<T>(
    dir: &Path,
    file: &str,
    table: &'static str,
    parse: fn(&Row<'_>) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError> {
    let path = dir.join(file);
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: path.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)
        .map_err(csv_error)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        rows.push(parse(&Row {
            table,
            line,
            record: &record,
        })?);
    }

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_shop(row: &Row<'_>) -> Result<ShopRecord, LoadError> {
    Ok(ShopRecord {
        id: row.text(0, "id")?,
        name: row.text(1, "name")?,
        lat: row.real(2, "lat")?,
        lng: row.real(3, "lng")?,
    })
}

fn parse_tag(row: &Row<'_>) -> Result<TagRecord, LoadError> {
    Ok(TagRecord {
        id: row.text(0, "id")?,
        tag: row.text(1, "tag")?,
    })
}

fn parse_tagging(row: &Row<'_>) -> Result<TaggingRecord, LoadError> {
    Ok(TaggingRecord {
        id: row.text(0, "id")?,
        shop_id: row.text(1, "shop_id")?,
        tag_id: row.text(2, "tag_id")?,
    })
}

fn parse_product(row: &Row<'_>) -> Result<ProductRecord, LoadError> {
    Ok(ProductRecord {
        id: row.text(0, "id")?,
        shop_id: row.text(1, "shop_id")?,
        title: row.text(2, "title")?,
        popularity: row.real(3, "popularity")?,
        quantity: row.number(4, "quantity")?,
    })
}
