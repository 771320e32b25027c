//! Icon metadata records
//!
//! These types mirror one entry of the metadata document:
//!
//! ```json
//! "github": {
//!   "base": "svg",
//!   "aliases": ["git-hub"],
//!   "categories": ["dev-tools"],
//!   "update": { "timestamp": "2024-01-01T00:00:00Z", "author": { "id": 1 } },
//!   "colors": { "dark": "github-dark", "light": "github-light" }
//! }
//! ```
//!
//! Optional parts degrade to empty values instead of failing to parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Native image format an icon is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BaseFormat {
    #[default]
    Svg,
    Png,
    Webp,
    /// Any format string this version does not know about
    #[serde(other)]
    Unknown,
}

impl fmt::Display for BaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Contributor of an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IconAuthor {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Last change to an icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IconUpdate {
    /// Timestamp as written in the metadata; parsed lazily
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub author: IconAuthor,
}

impl IconUpdate {
    /// Milliseconds since the Unix epoch, if the timestamp can be parsed
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and a
    /// bare `YYYY-MM-DD` (UTC midnight).
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        parse_timestamp_millis(&self.timestamp)
    }
}

fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Light/dark alternates of an icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IconColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

/// Metadata attached to an icon name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IconData {
    #[serde(default)]
    pub base: BaseFormat,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<IconUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<IconColors>,
}

impl IconData {
    /// Update time in epoch milliseconds; missing or unparseable is 0
    #[must_use]
    pub fn updated_millis(&self) -> i64 {
        self.update
            .as_ref()
            .and_then(IconUpdate::timestamp_millis)
            .unwrap_or(0)
    }
}

/// An icon name paired with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub name: String,
    pub data: IconData,
}

impl IconRecord {
    /// Create a new record
    #[must_use]
    pub fn new(name: impl Into<String>, data: IconData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// True if any category equals one of `selected`, ignoring case
    #[must_use]
    pub fn in_any_category<S: AsRef<str>>(&self, selected: &[S]) -> bool {
        self.data.categories.iter().any(|cat| {
            selected
                .iter()
                .any(|sel| cat.to_lowercase() == sel.as_ref().to_lowercase())
        })
    }
}
