//! Per-brand aggregation of product ratings.
//!
//! Groups products by their canonical brand key and computes the mean
//! rating per brand. The reader already canonicalized brand keys, so no
//! re-normalization happens here.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{BrandStats, Product};

/// Compute per-brand rating statistics.
///
/// Averages are rounded to 2 decimal places and the result is sorted by
/// average rating, highest first. Brands with equal averages keep the
/// order in which they were first seen. An empty input yields an empty
/// result; this function never fails.
pub fn brand_stats(products: &[Product]) -> Vec<BrandStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for product in products {
        let entry = totals.entry(product.brand.as_str()).or_insert_with(|| {
            order.push(product.brand.as_str());
            (0.0, 0)
        });
        entry.0 += product.rating;
        entry.1 += 1;
    }

    let mut stats: Vec<BrandStats> = order
        .into_iter()
        .map(|brand| {
            let (total, count) = totals[brand];
            BrandStats {
                brand: brand.to_string(),
                average_rating: round2(total / count as f64),
                product_count: count,
            }
        })
        .collect();

    // Stable sort: first-seen order survives among equal averages.
    stats.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));

    debug!(brands = stats.len(), "aggregated brand statistics");
    stats
}

/// Round to 2 decimal places, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
