//! Error types for Radiorank
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for Radiorank operations
pub type Result<T> = std::result::Result<T, RadiorankError>;

/// Main error type for Radiorank operations
#[derive(Error, Debug)]
pub enum RadiorankError {
    /// Scenario validation or preset error
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Result table export error
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Justification note store error
    #[error("Note error: {0}")]
    Note(#[from] NoteError),
}

/// Errors raised at the scenario input boundary
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Parameter outside its documented inclusive range
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// rx/tx time ratio must be a finite non-negative number
    #[error("Invalid rx/tx ratio: {0}")]
    InvalidRxRatio(f64),

    /// Preset file IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preset JSON failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors during CSV export or re-import of the result table
#[derive(Error, Debug)]
pub enum ExportError {
    /// File IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization/parse failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row names a protocol outside the built-in table
    #[error("Unknown protocol in row {row}: {name}")]
    UnknownProtocol { row: usize, name: String },
}

/// Errors from the justification note store
#[derive(Error, Debug)]
pub enum NoteError {
    /// File IO failure (non-fatal to the caller; retry the save)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
