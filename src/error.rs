//! Error types for the brandstats analysis pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ConversionError`] - numeric field conversion failures
//! - [`RowError`] - row-scoped failures (recoverable, the row is skipped)
//! - [`ReadError`] - structural file errors (abort the whole read)
//! - [`ReportError`] - report selection errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Conversion Errors
// =============================================================================

/// Errors while converting a raw cell into a number.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConversionError {
    /// Value absent from the row.
    #[error("Value is missing")]
    Missing,

    /// Value present but blank after trimming.
    #[error("Value cannot be empty")]
    Empty,

    /// Value does not parse as a finite decimal number.
    #[error("Cannot convert '{0}' to a number")]
    NotANumber(String),
}

// =============================================================================
// Row Errors
// =============================================================================

/// Errors scoped to a single data row.
///
/// These never abort a read: the offending row is skipped with a
/// warning and processing continues.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RowError {
    /// A required text field is absent or blank.
    #[error("Required field '{0}' cannot be empty")]
    MissingField(&'static str),

    /// A numeric field failed conversion.
    #[error("Invalid value for field '{field}': {source}")]
    Conversion {
        field: &'static str,
        source: ConversionError,
    },

    /// Rating outside the closed [0, 5] interval.
    #[error("Rating must be between 0 and 5, got {0:.2}")]
    RatingOutOfRange(f64),
}

// =============================================================================
// Read Errors (structural)
// =============================================================================

/// Structural errors while reading an input file.
///
/// Any of these aborts the whole read, including files that were
/// already processed successfully.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input file does not exist.
    #[error("File {} not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// File has no header row to define columns.
    #[error("File {} has no headers", .path.display())]
    NoHeaders { path: PathBuf },

    /// Header row lacks one or more required columns.
    #[error("File {} is missing required columns {missing:?} (found: {found:?})", .path.display())]
    MissingColumns {
        path: PathBuf,
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Malformed CSV data or a decode failure mid-file.
    #[error("Error reading file {}: {source}", .path.display())]
    Format { path: PathBuf, source: csv::Error },

    /// Filesystem error other than a missing file.
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors while selecting a report kind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    /// Requested report identifier is not recognized.
    #[error("Unknown report type: {0}")]
    Unknown(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::analyze`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Structural read error.
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    /// Report selection error.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for cell conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for row processing.
pub type RowResult<T> = Result<T, RowError>;

/// Result type for file reading.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for report selection.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
