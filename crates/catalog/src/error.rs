//! Error types for the catalog crate.
//!
//! Every failure while reading or checking the reference data ends up here.
//! None of them are recoverable inside the search core: the caller decides
//! how to surface them.

use thiserror::Error;

/// Errors that can occur while loading the reference catalogs
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file is missing from the data directory
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON or does not match the record layout
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Two records of the same kind share a symbol
    #[error("Duplicate {entity} symbol: {symbol}")]
    DuplicateSymbol { entity: String, symbol: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
