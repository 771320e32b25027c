//! Testing utilities for iconr
//!
//! Fixture builders for icon records and a small sample catalog shared by
//! the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::icons::{BaseFormat, IconAuthor, IconData, IconRecord, IconUpdate};

/// Tolerance for comparing computed scores
pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within [`EPSILON`]
///
/// # Panics
/// Panics if the values differ by more than the tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Builder for test icon records
///
/// # Examples
/// ```ignore
/// let record = icon("github").alias("git-hub").category("dev-tools").build();
/// ```
#[derive(Debug, Clone)]
pub struct IconBuilder {
    name: String,
    data: IconData,
}

/// Start building a record with the given name
pub fn icon(name: &str) -> IconBuilder {
    IconBuilder {
        name: name.to_string(),
        data: IconData::default(),
    }
}

impl IconBuilder {
    pub fn alias(mut self, alias: &str) -> Self {
        self.data.aliases.push(alias.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.data.categories.push(category.to_string());
        self
    }

    pub fn base(mut self, base: BaseFormat) -> Self {
        self.data.base = base;
        self
    }

    /// Set the update timestamp, authored by a fixed test contributor
    pub fn updated(mut self, timestamp: &str) -> Self {
        self.data.update = Some(IconUpdate {
            timestamp: timestamp.to_string(),
            author: IconAuthor {
                id: 1,
                name: Some("tester".to_string()),
            },
        });
        self
    }

    pub fn build(self) -> IconRecord {
        IconRecord::new(self.name, self.data)
    }
}

/// A small catalog, sorted by name
pub fn sample_icons() -> Vec<IconRecord> {
    vec![
        icon("adguard").alias("adguard-home").category("networking").category("dns")
            .updated("2024-03-01T12:00:00Z").build(),
        icon("gitea").category("dev-tools").updated("2023-02-10").build(),
        icon("github").alias("git-hub").category("dev-tools").updated("2024-01-01").build(),
        icon("gitlab").category("dev-tools").updated("2023-01-01").build(),
        icon("home-assistant").alias("hass").category("smart-home").updated("2024-05-20").build(),
        icon("homepage").category("dashboard").updated("2022-11-11").build(),
        icon("jellyfin").category("media").base(BaseFormat::Png).build(),
        icon("nginx").category("networking").category("web").updated("2021-07-07").build(),
        icon("pihole").alias("pi-hole").category("networking").category("dns")
            .updated("2023-09-09").build(),
        icon("plex").alias("plex-media").category("media").updated("2024-02-02").build(),
        icon("proxmox").category("virtualization").base(BaseFormat::Webp).build(),
        icon("traefik").alias("proxy").category("networking").updated("2022-04-04").build(),
    ]
}

/// Names of the given records, in order
pub fn names<'a>(records: &[&'a IconRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
