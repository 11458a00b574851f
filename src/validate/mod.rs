//! Row-level validation rules.
//!
//! A raw row is a mapping from column name to an optional cell value.
//! The rules here decide whether a row is worth processing at all
//! ([`is_empty_row`]), whether its required text fields are filled
//! ([`validate_required_fields`]), and whether a converted rating is in
//! range ([`validate_rating`]).

use serde_json::{Map, Value};

use crate::error::{RowError, RowResult};

/// Check whether a raw row carries no usable data.
///
/// A row is empty when it has no columns at all, or when every cell is
/// absent or blank after trimming. Numeric and boolean cells always
/// count as data, including `0` and `false`.
pub fn is_empty_row(row: &Map<String, Value>) -> bool {
    row.values().all(is_blank)
}

/// Ensure the required text fields are filled.
///
/// `name` is checked before `brand`; the returned error names the first
/// field that is absent or blank.
pub fn validate_required_fields(row: &Map<String, Value>) -> RowResult<()> {
    for field in ["name", "brand"] {
        let blank = match row.get(field) {
            None => true,
            Some(value) => is_blank(value),
        };
        if blank {
            return Err(RowError::MissingField(field));
        }
    }
    Ok(())
}

/// Ensure a rating lies within the closed interval [0, 5].
pub fn validate_rating(rating: f64) -> RowResult<()> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        Err(RowError::RatingOutOfRange(rating))
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
