//! Multi-field ranking and filtering
//!
//! The pipeline, applied to a read-only slice of records on every call:
//!
//! 1. Keep records sharing at least one category with the selection
//!    (case-insensitive); an empty selection keeps everything.
//! 2. A blank query skips scoring and keeps the incoming order.
//! 3. Otherwise score name, aliases and categories with [`fuzzy_score_with`],
//!    weight them, and take the best field.
//! 4. Down-weight hits carried by a category alone.
//! 5. Down-weight records where some query word is not a literal substring
//!    of any field.
//! 6. Drop everything at or below the relevance threshold.
//! 7. Order by score descending, ties by name.
//! 8. A non-relevance sort mode replaces that order entirely.
//! 9. Truncate to the limit.
//!
//! Names compare in case-sensitive code-point order everywhere
//! ([`compare_names`]).

use super::fuzzy::{fuzzy_score_with, split_words};
use super::params::ScoringParams;
use super::query::{QueryState, SortMode};
use crate::icons::IconRecord;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

/// One ranked result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    #[serde(flatten)]
    pub icon: &'a IconRecord,
    /// Relevance score; `None` when the query was blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Per-field weighted scores for one record
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldScores {
    pub name: f64,
    pub alias: f64,
    pub category: f64,
}

impl FieldScores {
    /// Score each field of `record` against `query`
    #[must_use]
    pub fn compute(record: &IconRecord, query: &str, params: &ScoringParams) -> Self {
        let best = |values: &[String]| {
            values
                .iter()
                .map(|v| fuzzy_score_with(v, query, params))
                .fold(0.0_f64, f64::max)
        };

        Self {
            name: fuzzy_score_with(&record.name, query, params) * params.name_weight,
            alias: best(&record.data.aliases) * params.alias_weight,
            category: best(&record.data.categories) * params.category_weight,
        }
    }

    /// Best of the three fields
    #[must_use]
    pub fn max(&self) -> f64 {
        self.name.max(self.alias).max(self.category)
    }

    /// True if the hit comes from a category and neither name nor alias
    #[must_use]
    pub fn is_category_only(&self, params: &ScoringParams) -> bool {
        self.category > params.category_only_threshold
            && self.name < params.category_only_ceiling
            && self.alias < params.category_only_ceiling
    }
}

/// Collation used for every name comparison
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Final relevance of one record, before the threshold is applied
///
/// The query is scored as typed; surrounding whitespace counts.
#[must_use]
pub fn score_icon(record: &IconRecord, query: &str, params: &ScoringParams) -> f64 {
    let fields = FieldScores::compute(record, query, params);

    let mut score = fields.max();
    if fields.is_category_only(params) {
        score *= params.category_only_penalty;
    }
    if !all_words_present(record, query) {
        score *= params.missing_words_penalty;
    }
    score
}

/// Coarse check: every query word is a literal substring of some field
fn all_words_present(record: &IconRecord, query: &str) -> bool {
    let name = record.name.to_lowercase();
    let aliases: Vec<String> = record.data.aliases.iter().map(|a| a.to_lowercase()).collect();
    let categories: Vec<String> = record.data.categories.iter().map(|c| c.to_lowercase()).collect();

    let query = query.to_lowercase();
    split_words(&query).into_iter().all(|word| {
        name.contains(word)
            || aliases.iter().any(|a| a.contains(word))
            || categories.iter().any(|c| c.contains(word))
    })
}

/// Filter, rank and truncate with the default parameters
#[must_use]
pub fn search<'a>(icons: &'a [IconRecord], query: &QueryState) -> Vec<&'a IconRecord> {
    search_with(icons, query, &ScoringParams::default())
}

/// Filter, rank and truncate with explicit parameters
#[must_use]
pub fn search_with<'a>(
    icons: &'a [IconRecord],
    query: &QueryState,
    params: &ScoringParams,
) -> Vec<&'a IconRecord> {
    rank(icons, query, params)
        .into_iter()
        .map(|hit| hit.icon)
        .collect()
}

/// Filter, rank and truncate, keeping each result's score
#[must_use]
pub fn rank<'a>(
    icons: &'a [IconRecord],
    query: &QueryState,
    params: &ScoringParams,
) -> Vec<SearchHit<'a>> {
    let candidates = icons
        .iter()
        .filter(|icon| query.categories.is_empty() || icon.in_any_category(query.categories.as_slice()));

    let mut hits: Vec<SearchHit<'a>> = if query.is_blank() {
        candidates
            .map(|icon| SearchHit { icon, score: None })
            .collect()
    } else {
        let text = query.text.as_str();
        let mut scored: Vec<SearchHit<'a>> = candidates
            .map(|icon| SearchHit {
                icon,
                score: Some(score_icon(icon, text, params)),
            })
            .filter(|hit| hit.score.is_some_and(|s| s > params.relevance_threshold))
            .collect();

        scored.sort_by(|a, b| {
            let (sa, sb) = (a.score.unwrap_or(0.0), b.score.unwrap_or(0.0));
            sb.total_cmp(&sa)
                .then_with(|| compare_names(&a.icon.name, &b.icon.name))
        });
        scored
    };

    match query.sort {
        SortMode::Relevance => {}
        SortMode::NameAsc => hits.sort_by(|a, b| compare_names(&a.icon.name, &b.icon.name)),
        SortMode::NameDesc => hits.sort_by(|a, b| compare_names(&b.icon.name, &a.icon.name)),
        SortMode::Newest => hits.sort_by_key(|hit| Reverse(hit.icon.data.updated_millis())),
    }

    if let Some(limit) = query.effective_limit() {
        hits.truncate(limit);
    }

    hits
}

/// The alias that explains a non-name hit
///
/// When the query is not a substring of the name, returns the first alias
/// that contains it (case-insensitive). A blank query matches nothing.
#[must_use]
pub fn matched_alias<'a>(record: &'a IconRecord, query: &str) -> Option<&'a str> {
    if query.trim().is_empty() {
        return None;
    }
    let q = query.to_lowercase();
    if record.name.to_lowercase().contains(&q) {
        return None;
    }
    record
        .data
        .aliases
        .iter()
        .find(|alias| alias.to_lowercase().contains(&q))
        .map(String::as_str)
}

/// Map of icon name to the alias that matched, for every record with one
#[must_use]
pub fn matched_aliases<'a, I>(records: I, query: &str) -> HashMap<&'a str, &'a str>
where
    I: IntoIterator<Item = &'a IconRecord>,
{
    records
        .into_iter()
        .filter_map(|record| matched_alias(record, query).map(|alias| (record.name.as_str(), alias)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_close, icon, names, sample_icons};

    fn run(icons: &[IconRecord], query: QueryState) -> Vec<&str> {
        names(&search(icons, &query))
    }

    #[test]
    fn test_empty_collection() {
        assert!(search(&[], &QueryState::text("git")).is_empty());
        assert!(search(&[], &QueryState::default()).is_empty());
    }

    #[test]
    fn test_blank_query_keeps_order() {
        let icons = sample_icons();
        let all: Vec<&str> = icons.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(run(&icons, QueryState::default()), all);
        assert_eq!(run(&icons, QueryState::text("   ")), all);
    }

    #[test]
    fn test_prefix_tie_broken_by_name() {
        let icons = vec![
            icon("gitlab").category("dev-tools").build(),
            icon("github").alias("git-hub").category("dev-tools").build(),
        ];
        let hits = rank(&icons, &QueryState::text("git"), &ScoringParams::default());

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].icon.name, "github");
        assert_eq!(hits[1].icon.name, "gitlab");
        assert_close(hits[0].score.unwrap(), 3.3);
        assert_close(hits[1].score.unwrap(), 3.3);
    }

    #[test]
    fn test_typo_below_threshold() {
        let icons = vec![icon("github").alias("git-hub").category("dev-tools").build()];
        let params = ScoringParams::default();

        assert_close(score_icon(&icons[0], "hube", &params), 0.02 * 0.4);
        assert!(search(&icons, &QueryState::text("hube")).is_empty());
    }

    #[test]
    fn test_missing_word_penalty_drops_typo() {
        // Strong fuzzy name match, but "jelyfin" is not a literal substring
        let record = icon("jellyfin").category("media").build();
        let score = score_icon(&record, "jelyfin", &ScoringParams::default());
        assert_close(score, 2.0 * (0.1 * 8.0 / 9.0 + 0.1 * 0.875 + 0.6) * 0.4);
        assert!(score <= 0.7);
    }

    #[test]
    fn test_category_only_penalty() {
        let record = icon("nginx").category("networking").build();
        let params = ScoringParams::default();
        let fields = FieldScores::compute(&record, "networking", &params);

        assert!(fields.is_category_only(&params));
        assert_close(score_icon(&record, "networking", &params), fields.category * 0.7);
    }

    #[test]
    fn test_category_only_and_missing_word_penalties_compound() {
        // "netwrking" fuzzy-matches the category but is not a literal substring
        let record = icon("nginx").category("networking").build();
        let params = ScoringParams::default();
        let fields = FieldScores::compute(&record, "netwrking", &params);

        assert!(fields.is_category_only(&params));
        assert_close(fields.category, 0.6 + 0.1 * 10.0 / 11.0 + 0.1 * 0.9);
        assert_close(score_icon(&record, "netwrking", &params), fields.category * 0.7 * 0.4);
        assert!(search(&[record], &QueryState::text("netwrking")).is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_scored() {
        let icons = vec![icon("github").alias("git-hub").category("dev-tools").build()];
        let params = ScoringParams::default();

        let exact = rank(&icons, &QueryState::text("git"), &params);
        let typing = rank(&icons, &QueryState::text("git "), &params);
        assert_close(exact[0].score.unwrap(), 3.3);
        assert_close(typing[0].score.unwrap(), 1.3);
    }

    #[test]
    fn test_trailing_space_drops_category_only_hit() {
        let icons = vec![icon("jellyfin").category("media").build()];
        assert_eq!(run(&icons, QueryState::text("media")), vec!["jellyfin"]);
        assert!(run(&icons, QueryState::text("media ")).is_empty());
    }

    #[test]
    fn test_alias_hit_is_not_category_only() {
        let record = icon("plex").alias("plex-media").category("media").build();
        let params = ScoringParams::default();
        let fields = FieldScores::compute(&record, "media", &params);

        assert!(!fields.is_category_only(&params));
        assert_close(score_icon(&record, "media", &params), fields.alias);
    }

    #[test]
    fn test_name_outranks_category() {
        let icons = vec![
            icon("adguard").category("dns").build(),
            icon("dns").category("networking").build(),
        ];
        assert_eq!(run(&icons, QueryState::text("dns")), vec!["dns", "adguard"]);
    }

    #[test]
    fn test_threshold_law() {
        let icons = sample_icons();
        let params = ScoringParams::default();
        for text in ["git", "home", "media", "dns", "prox", "zz", "jelly fin", "net"] {
            for hit in rank(&icons, &QueryState::text(text), &params) {
                let score = hit.score.unwrap();
                assert!(score > 0.7, "{} scored {score} for {text}", hit.icon.name);
                assert_close(score, score_icon(hit.icon, text, &params));
            }
        }
    }

    #[test]
    fn test_relevance_is_descending() {
        let icons = sample_icons();
        let hits = rank(&icons, &QueryState::text("home"), &ScoringParams::default());
        assert!(!hits.is_empty());
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_category_filter_blank_query() {
        let icons = sample_icons();
        let query = QueryState::builder().category("networking").build();
        assert_eq!(run(&icons, query), vec!["adguard", "nginx", "pihole", "traefik"]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let icons = sample_icons();
        let query = QueryState::builder().category("NETWORKING").build();
        assert_eq!(run(&icons, query).len(), 4);
    }

    #[test]
    fn test_category_filter_widening() {
        let icons = sample_icons();
        let narrow = run(&icons, QueryState::builder().category("media").build());
        let wide = run(
            &icons,
            QueryState::builder().categories(["media", "dns"]).build(),
        );

        assert!(wide.len() > narrow.len());
        for name in &narrow {
            assert!(wide.contains(name));
        }
    }

    #[test]
    fn test_category_filter_with_query() {
        let icons = sample_icons();
        let query = QueryState::builder().text("pi").category("media").build();
        assert!(!run(&icons, query).contains(&"pihole"));
    }

    #[test]
    fn test_unknown_category_yields_nothing() {
        let icons = sample_icons();
        let query = QueryState::builder().category("gaming").build();
        assert!(run(&icons, query).is_empty());
    }

    #[test]
    fn test_name_sorts_override_relevance() {
        let icons = vec![
            icon("gitea").build(),
            icon("git").build(),
            icon("github").build(),
        ];
        let asc = QueryState::builder().text("git").sort(SortMode::NameAsc).build();
        let desc = QueryState::builder().text("git").sort(SortMode::NameDesc).build();

        assert_eq!(run(&icons, QueryState::text("git"))[0], "git");
        assert_eq!(run(&icons, asc), vec!["git", "gitea", "github"]);
        assert_eq!(run(&icons, desc), vec!["github", "gitea", "git"]);
    }

    #[test]
    fn test_name_sort_is_code_point_order() {
        let icons = vec![icon("b").build(), icon("a").build(), icon("B").build()];
        let query = QueryState::builder().sort(SortMode::NameAsc).build();
        assert_eq!(run(&icons, query), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_newest_ignores_relevance() {
        let icons = vec![
            icon("git").updated("2023-01-01").build(),
            icon("gitea").updated("2024-01-01").build(),
        ];
        let query = QueryState::builder().text("git").sort(SortMode::Newest).build();
        assert_eq!(run(&icons, query), vec!["gitea", "git"]);
    }

    #[test]
    fn test_newest_missing_timestamp_sorts_last() {
        let icons = vec![
            icon("alpha").build(),
            icon("beta").updated("not a date").build(),
            icon("gamma").updated("2021-05-05T10:00:00Z").build(),
        ];
        let query = QueryState::builder().sort(SortMode::Newest).build();
        assert_eq!(run(&icons, query), vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_limit_keeps_highest_ranked_prefix() {
        let icons = sample_icons();
        let full = run(&icons, QueryState::text("home"));
        let limited = run(&icons, QueryState::builder().text("home").limit(2).build());

        assert!(full.len() > 2);
        assert_eq!(limited, full[..2].to_vec());
    }

    #[test]
    fn test_limit_larger_than_results() {
        let icons = sample_icons();
        let full = run(&icons, QueryState::text("home"));
        let limited = run(&icons, QueryState::builder().text("home").limit(100).build());
        assert_eq!(limited, full);
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let icons = sample_icons();
        let query = QueryState::builder().limit(0).build();
        assert_eq!(run(&icons, query).len(), icons.len());
    }

    #[test]
    fn test_custom_threshold() {
        let icons = vec![icon("jellyfin").build()];
        let strict = ScoringParams::default();
        let loose = ScoringParams {
            relevance_threshold: 0.5,
            ..ScoringParams::default()
        };
        let query = QueryState::text("jelyfin");

        assert!(search_with(&icons, &query, &strict).is_empty());
        assert_eq!(search_with(&icons, &query, &loose).len(), 1);
    }

    #[test]
    fn test_matched_alias() {
        let record = icon("home-assistant").alias("hass").alias("HA-OS").build();
        assert_eq!(matched_alias(&record, "hass"), Some("hass"));
        assert_eq!(matched_alias(&record, "ha-os"), Some("HA-OS"));
        assert_eq!(matched_alias(&record, "home"), None);
        assert_eq!(matched_alias(&record, "  "), None);
        assert_eq!(matched_alias(&record, "hass "), None);
        assert_eq!(matched_alias(&record, "zzz"), None);
    }

    #[test]
    fn test_matched_aliases_map() {
        let icons = sample_icons();
        let map = matched_aliases(&icons, "hass");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("home-assistant"), Some(&"hass"));
        assert!(matched_aliases(&icons, "").is_empty());
    }

    #[test]
    fn test_hit_serializes_flat() {
        let record = icon("plex").build();
        let hit = SearchHit {
            icon: &record,
            score: Some(1.5),
        };
        let json = serde_json::to_value(hit).unwrap();
        assert_eq!(json["name"], "plex");
        assert_eq!(json["score"], 1.5);
        assert!(json["data"].is_object());
    }
}
