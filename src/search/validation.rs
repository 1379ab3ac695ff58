//! Request Validation
//!
//! Turns a raw `/search` body into a [`SearchQuery`]. Numeric fields accept JSON
//! numbers or numeric strings; `count` must be a non-negative integer and
//! `radius` may not exceed the configured maximum.

use super::types::SearchQuery;
use crate::error::ApiError;
use serde_json::{Map, Value};

pub fn validate_search_request(body: &[u8], max_radius: f64) -> Result<SearchQuery, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingBody);
    }
    let content: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidParameter)?;
    let content = match content {
        Value::Object(map) => map,
        Value::Null => return Err(ApiError::MissingBody),
        _ => return Err(ApiError::InvalidParameter),
    };

    let count = integer_field(&content, "count")?;
    let lat = number_field(&content, "lat")?;
    let lng = number_field(&content, "lng")?;
    let radius = number_field(&content, "radius")?;
    let tags = tags_field(&content)?;

    if count < 0 {
        return Err(ApiError::InvalidParameter);
    }
    if radius > max_radius {
        return Err(ApiError::RadiusTooLarge(max_radius));
    }

    Ok(SearchQuery::new(count, lat, lng, radius, tags)?)
}

fn required<'a>(content: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, ApiError> {
    content.get(name).ok_or(ApiError::MissingParameter(name))
}

fn integer_field(content: &Map<String, Value>, name: &'static str) -> Result<i64, ApiError> {
    match required(content, name)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or(ApiError::InvalidParameter),
        Value::String(s) => s.trim().parse().map_err(|_| ApiError::InvalidParameter),
        _ => Err(ApiError::InvalidParameter),
    }
}

fn number_field(content: &Map<String, Value>, name: &'static str) -> Result<f64, ApiError> {
    let value = match required(content, name)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    value
        .filter(|f: &f64| f.is_finite())
        .ok_or(ApiError::InvalidParameter)
}

fn tags_field(content: &Map<String, Value>) -> Result<Option<Vec<String>>, ApiError> {
    match content.get("tags") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(tag) => Ok(tag.clone()),
                _ => Err(ApiError::InvalidParameter),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(ApiError::InvalidParameter),
    }
}
