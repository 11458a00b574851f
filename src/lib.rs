//! # Brandstats - product rating analyzer
//!
//! Reads product records from CSV files, cleans and validates them, and
//! aggregates per-brand average ratings into console report tables.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌────────────────────┐     ┌──────────────────┐     ┌────────────┐
//! │ CSV files │ ──▶ │ Reader             │ ──▶ │ Aggregator       │ ──▶ │ Report     │
//! │           │     │ validate/normalize │     │ avg rating/brand │     │ grid table │
//! └───────────┘     └────────────────────┘     └──────────────────┘     └────────────┘
//! ```
//!
//! Invalid rows are skipped with a warning; structural file problems
//! (missing file, missing columns) abort the run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brandstats::analyze;
//!
//! let table = analyze(&["products.csv"], "average-rating")?;
//! println!("{table}");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - error types for every stage
//! - [`models`] - core data structures
//! - [`convert`] - cell-level text and number coercion
//! - [`validate`] - row-level validation rules
//! - [`reader`] - CSV file reading and row processing
//! - [`aggregate`] - per-brand statistics
//! - [`report`] - report kinds and grid rendering
//! - [`pipeline`] - end-to-end analysis entry point

// Core modules
pub mod error;
pub mod models;

// Cell conversion and row validation
pub mod convert;
pub mod validate;

// Reading
pub mod reader;

// Aggregation
pub mod aggregate;

// Reporting
pub mod report;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConversionError, ConversionResult, PipelineError, PipelineResult, ReadError, ReadResult,
    ReportError, ReportResult, RowError, RowResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{BrandStats, Product};

// =============================================================================
// Re-exports - Conversion
// =============================================================================

pub use convert::{normalize_text, parse_number};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validate::{is_empty_row, validate_rating, validate_required_fields};

// =============================================================================
// Re-exports - Reader
// =============================================================================

pub use reader::{read_products, REQUIRED_COLUMNS};

// =============================================================================
// Re-exports - Aggregation
// =============================================================================

pub use aggregate::brand_stats;

// =============================================================================
// Re-exports - Reports
// =============================================================================

pub use report::ReportKind;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::analyze;
