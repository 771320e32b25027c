//! Search-specific error types
//!
//! Scoring and ranking never fail. The only fallible step on the search
//! side is turning user-supplied text (URL values, config strings) into a
//! [`SortMode`](super::SortMode).

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The sort mode string is not recognised
    #[error("Invalid sort mode '{0}' (expected relevance, name-asc, name-desc or newest)")]
    InvalidSortMode(String),
}
