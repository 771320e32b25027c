//! Icon catalog
//!
//! Boundary types for the icon metadata document and the read-only
//! [`IconCatalog`] the search engine scans. Fetching the document is the
//! caller's business; this module only parses and indexes it.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{DEFAULT_RECENT_COUNT, IconCatalog};
pub use error::CatalogError;
pub use types::{BaseFormat, IconAuthor, IconColors, IconData, IconRecord, IconUpdate};
