//! Iconr - fuzzy search for dashboard icon metadata
//!
//! This library provides the icon catalog types and a pure search and
//! ranking engine that scores every icon's name, aliases and categories
//! against a free-text query.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod icons;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum IconrError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] icons::CatalogError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for IconrError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for IconrError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
