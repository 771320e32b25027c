//! Fuzzy icon search and ranking
//!
//! A pure, synchronous pipeline over an in-memory slice of
//! [`IconRecord`](crate::icons::IconRecord)s. Every call rescans and
//! rescores from scratch; there is no index, cache or shared state, so
//! concurrent calls are independent.
//!
//! ```
//! use iconr::icons::{IconData, IconRecord};
//! use iconr::search::{QueryState, SortMode, search};
//!
//! let icons = vec![
//!     IconRecord::new("github", IconData::default()),
//!     IconRecord::new("gitlab", IconData::default()),
//!     IconRecord::new("plex", IconData::default()),
//! ];
//!
//! let query = QueryState::builder().text("git").sort(SortMode::Relevance).build();
//! let names: Vec<&str> = search(&icons, &query).iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, vec!["github", "gitlab"]);
//! ```

pub mod error;
pub mod fuzzy;
pub mod params;
pub mod query;
pub mod rank;
pub mod similarity;

pub use error::SearchError;
pub use fuzzy::{fuzzy_score, fuzzy_score_with};
pub use params::ScoringParams;
pub use query::{QueryState, QueryStateBuilder, SortMode};
pub use rank::{
    FieldScores, SearchHit, compare_names, matched_alias, matched_aliases, rank, score_icon, search,
    search_with,
};
pub use similarity::{levenshtein_distance, ordered_subsequence_score, string_similarity};
