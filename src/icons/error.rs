//! Catalog error types
//!
//! Loading the metadata document can fail on I/O or malformed JSON, and
//! strict lookups fail on unknown names. Search itself never errors.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or querying the icon catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the metadata document failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The metadata document is not valid JSON of the expected shape
    #[error("Invalid metadata document: {0}")]
    Parse(#[from] serde_json::Error),

    /// No icon with that name
    #[error("Icon '{0}' not found")]
    NotFound(String),
}
