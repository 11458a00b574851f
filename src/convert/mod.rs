//! Field-level conversion of raw CSV cells.
//!
//! Raw cells arrive as `serde_json::Value`: strings for cells present in
//! the file, `Null` for cells a short row never supplied. These helpers
//! turn them into clean `String` and `f64` values for the reader.

use serde_json::Value;

use crate::error::{ConversionError, ConversionResult};

/// Normalize a raw cell into a trimmed string.
///
/// Absent values (`Null`) become the empty string. Non-string scalars
/// are stringified before trimming, so numeric or boolean cells survive
/// as text. Never fails.
pub fn normalize_text(value: &Value) -> String {
    stringify(value).trim().to_string()
}

/// Convert a raw cell into a finite `f64`.
///
/// Booleans coerce to `1.0` / `0.0` and numbers pass through unchanged.
/// Text is trimmed and parsed; scientific notation is accepted. Fails on
/// absent values, blank text, and anything that does not parse as a
/// finite decimal number (`NaN` and infinities are rejected). No
/// rounding happens here.
pub fn parse_number(value: &Value) -> ConversionResult<f64> {
    match value {
        Value::Null => Err(ConversionError::Missing),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ConversionError::NotANumber(n.to_string())),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(ConversionError::Empty);
            }
            parse_finite(trimmed)
        }
        other => Err(ConversionError::NotANumber(other.to_string())),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_finite(text: &str) -> ConversionResult<f64> {
    let number: f64 = text
        .parse()
        .map_err(|_| ConversionError::NotANumber(text.to_string()))?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(ConversionError::NotANumber(text.to_string()))
    }
}
