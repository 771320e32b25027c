//! In-memory icon catalog
//!
//! The catalog is materialised once from the metadata document and then
//! treated as read-only. Records are kept sorted by name so lookups are a
//! binary search and the incoming order for blank queries is stable.

use super::error::CatalogError;
use super::types::{IconData, IconRecord};
use crate::search::{self, QueryState, SortMode};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of icons shown as "recently added" when no count is given
pub const DEFAULT_RECENT_COUNT: usize = 8;

/// Read-only collection of icon records, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
    records: Vec<IconRecord>,
}

impl IconCatalog {
    /// Build a catalog from arbitrary records
    ///
    /// Records are sorted by name; when a name repeats, the first record
    /// wins.
    #[must_use]
    pub fn from_records(mut records: Vec<IconRecord>) -> Self {
        records.sort_by(|a, b| a.name.cmp(&b.name));
        let before = records.len();
        records.dedup_by(|later, earlier| later.name == earlier.name);
        if records.len() != before {
            tracing::warn!(dropped = before - records.len(), "duplicate icon names in catalog");
        }
        Self { records }
    }

    /// Parse a metadata document (a JSON object keyed by icon name)
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the document is not valid JSON of
    /// the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let map: BTreeMap<String, IconData> = serde_json::from_str(json)?;
        Ok(Self::from_map(map))
    }

    /// Parse a metadata document from a reader
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if reading fails or the JSON is malformed.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let map: BTreeMap<String, IconData> = serde_json::from_reader(reader)?;
        Ok(Self::from_map(map))
    }

    /// Load a metadata document from disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be opened and
    /// `CatalogError::Parse` if its contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading icon metadata");
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(icons = catalog.len(), "icon metadata loaded");
        Ok(catalog)
    }

    fn from_map(map: BTreeMap<String, IconData>) -> Self {
        Self::from_records(
            map.into_iter()
                .map(|(name, data)| IconRecord { name, data })
                .collect(),
        )
    }

    /// All records, sorted by name
    #[must_use]
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Number of icons
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no icons
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up an icon by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconRecord> {
        self.records
            .binary_search_by(|r| r.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Look up an icon by exact name, failing if it is absent
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no icon has that name.
    pub fn require(&self, name: &str) -> Result<&IconRecord, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// All icon names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Sorted, de-duplicated category vocabulary
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|r| r.data.categories.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of icons tagged with each category
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            let unique: BTreeSet<&str> = record.data.categories.iter().map(String::as_str).collect();
            for category in unique {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Most recently updated icons, newest first
    #[must_use]
    pub fn recently_added(&self, limit: usize) -> Vec<&IconRecord> {
        let query = QueryState::builder()
            .sort(SortMode::Newest)
            .limit(limit)
            .build();
        search::search(&self.records, &query)
    }
}
