//! End-to-end analysis pipeline.
//!
//! Ties the stages together behind a single call:
//!
//! 1. Resolve the requested report kind.
//! 2. Read and normalize product records from every input file.
//! 3. Aggregate per-brand statistics.
//! 4. Render the report table.
//!
//! Structural file problems and unknown report names abort the run; rows
//! that fail validation were already skipped by the reader.

use std::path::Path;

use tracing::debug;

use crate::aggregate::brand_stats;
use crate::error::PipelineResult;
use crate::reader::read_products;
use crate::report::ReportKind;

/// Run the full analysis over `paths` and return the rendered report.
///
/// `report` is a report id as listed by [`ReportKind::all`], for example
/// `"average-rating"`.
pub fn analyze<P: AsRef<Path>>(paths: &[P], report: &str) -> PipelineResult<String> {
    let kind: ReportKind = report.parse()?;
    debug!(files = paths.len(), report = %kind, "starting analysis");

    let products = read_products(paths)?;
    let stats = brand_stats(&products);
    let table = kind.render(&stats);

    debug!("analysis completed");
    Ok(table)
}
