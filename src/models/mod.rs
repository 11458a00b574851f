//! Domain models for the brand rating pipeline.
//!
//! - [`Product`] - a validated, normalized product record
//! - [`BrandStats`] - aggregated statistics for one brand

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A validated product record.
///
/// Instances are produced by the reader and uphold its contract:
/// `name` is trimmed and non-blank, `brand` is the canonical key
/// (trimmed, lowercase, non-blank), `price` is a finite number, and
/// `rating` lies within the closed range [0, 5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product display name, trimmed.
    pub name: String,
    /// Canonical brand key: trimmed and lowercased.
    pub brand: String,
    /// Price as given in the source file.
    pub price: f64,
    /// Customer rating in the closed range [0, 5].
    pub rating: f64,
}

// =============================================================================
// Brand Statistics
// =============================================================================

/// Aggregated statistics for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandStats {
    /// Canonical brand key.
    pub brand: String,
    /// Mean rating across the brand's products, rounded to 2 decimal places.
    pub average_rating: f64,
    /// Number of products contributing to the average.
    pub product_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serialization() {
        let product = Product {
            name: "iPhone 15 Pro".into(),
            brand: "apple".into(),
            price: 999.0,
            rating: 4.9,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("iPhone 15 Pro"));
        assert!(json.contains("apple"));
        assert!(json.contains("4.9"));
    }

    #[test]
    fn test_brand_stats_roundtrip() {
        let stats = BrandStats {
            brand: "samsung".into(),
            average_rating: 4.6,
            product_count: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: BrandStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
