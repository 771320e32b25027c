//! Query state and builder
//!
//! A [`QueryState`] is rebuilt for every search: free text, the selected
//! categories, the sort mode and an optional result cap.
//!
//! ```
//! use iconr::search::{QueryState, SortMode};
//!
//! let query = QueryState::builder()
//!     .text("home assistant")
//!     .category("smart-home")
//!     .sort(SortMode::Relevance)
//!     .limit(20)
//!     .build();
//!
//! assert_eq!(query.trimmed(), "home assistant");
//! assert_eq!(query.effective_limit(), Some(20));
//! ```

use super::error::SearchError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result ordering
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Descending relevance score, ties by name
    #[default]
    Relevance,
    /// Name, A to Z
    #[value(alias = "alphabetical-asc")]
    #[serde(alias = "alphabetical-asc")]
    NameAsc,
    /// Name, Z to A
    #[value(alias = "alphabetical-desc")]
    #[serde(alias = "alphabetical-desc")]
    NameDesc,
    /// Most recently updated first
    Newest,
}

impl SortMode {
    /// Canonical string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::Newest => "newest",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Best match",
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::Newest => "Newest first",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "name-asc" | "alphabetical-asc" => Ok(Self::NameAsc),
            "name-desc" | "alphabetical-desc" => Ok(Self::NameDesc),
            "newest" => Ok(Self::Newest),
            _ => Err(SearchError::InvalidSortMode(s.to_string())),
        }
    }
}

/// Everything the engine needs for one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Free-form search text; may be empty or contain several words
    pub text: String,
    /// Categories to intersect with; empty means no filtering
    pub categories: Vec<String>,
    /// Result ordering
    pub sort: SortMode,
    /// Maximum number of results; `None` or `Some(0)` means unlimited
    pub limit: Option<usize>,
}

impl QueryState {
    /// Create a new builder for constructing a `QueryState`
    #[must_use]
    pub fn builder() -> QueryStateBuilder {
        QueryStateBuilder::new()
    }

    /// Plain text query with default filters and ordering
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::builder().text(text).build()
    }

    /// Search text with surrounding whitespace removed
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when there is nothing to score
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Effective result cap, if any
    #[must_use]
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&n| n > 0)
    }
}

/// Builder for `QueryState`
#[derive(Debug, Default)]
pub struct QueryStateBuilder {
    text: String,
    categories: Vec<String>,
    sort: SortMode,
    limit: Option<usize>,
}

impl QueryStateBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add one category to the filter
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Replace the category filter
    #[must_use]
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort mode
    #[must_use]
    pub const fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Cap the number of results
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set or clear the result cap
    #[must_use]
    pub const fn maybe_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Build the `QueryState`
    #[must_use]
    pub fn build(self) -> QueryState {
        QueryState {
            text: self.text,
            categories: self.categories,
            sort: self.sort,
            limit: self.limit,
        }
    }
}
