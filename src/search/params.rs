//! Tunable scoring parameters
//!
//! Every weight, bonus, penalty and threshold used by the fuzzy scorer and
//! the ranking pipeline lives here as a named constant. [`ScoringParams`]
//! bundles them into a single record so callers (and the configuration
//! file) can override individual values without touching the engine.
//!
//! The defaults are empirically tuned. Changing them changes which icons
//! surface for a given query, so tests pin them down.

use serde::{Deserialize, Serialize};

/// Bonus when the text equals the query
pub const EXACT_MATCH_BONUS: f64 = 1.0;
/// Bonus when the text starts with the query
pub const PREFIX_MATCH_BONUS: f64 = 0.85;
/// Bonus when the text contains the query
pub const SUBSTRING_MATCH_BONUS: f64 = 0.7;

/// Weight applied to the ordered-subsequence score
pub const SUBSEQUENCE_WEIGHT: f64 = 0.1;
/// Weight applied to the edit-distance similarity
pub const SIMILARITY_WEIGHT: f64 = 0.1;
/// Weight applied to the fraction of query words matched
pub const WORD_MATCH_WEIGHT: f64 = 0.6;

/// Similarity a text word must exceed to count as matching a query word
pub const WORD_SIMILARITY_THRESHOLD: f64 = 0.8;
/// Subsequence score a text word must exceed to count as matching a query word
pub const WORD_SUBSEQUENCE_THRESHOLD: f64 = 0.5;

/// Multiplier when a multi-word query is only partially matched
pub const PARTIAL_WORDS_PENALTY: f64 = 0.4;
/// Scores below this are considered weak
pub const WEAK_MATCH_THRESHOLD: f64 = 0.5;
/// Multiplier applied to weak scores
pub const WEAK_MATCH_PENALTY: f64 = 0.3;

/// Field weight for the icon name
pub const NAME_WEIGHT: f64 = 2.0;
/// Field weight for aliases
pub const ALIAS_WEIGHT: f64 = 1.5;
/// Field weight for categories
pub const CATEGORY_WEIGHT: f64 = 1.0;

/// Category score above which a hit may count as category-only
pub const CATEGORY_ONLY_THRESHOLD: f64 = 0.7;
/// Name and alias scores must both stay below this for a category-only hit
pub const CATEGORY_ONLY_CEILING: f64 = 0.5;
/// Multiplier for category-only hits
pub const CATEGORY_ONLY_PENALTY: f64 = 0.7;

/// Multiplier when some query word appears in no field
pub const MISSING_WORDS_PENALTY: f64 = 0.4;
/// Results must score strictly above this to be returned
pub const RELEVANCE_THRESHOLD: f64 = 0.7;

/// Complete set of tunables for scoring and ranking
///
/// Deserializes from the `[scoring]` table of the configuration file; any
/// field left out keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    pub exact_match_bonus: f64,
    pub prefix_match_bonus: f64,
    pub substring_match_bonus: f64,
    pub subsequence_weight: f64,
    pub similarity_weight: f64,
    pub word_match_weight: f64,
    pub word_similarity_threshold: f64,
    pub word_subsequence_threshold: f64,
    pub partial_words_penalty: f64,
    pub weak_match_threshold: f64,
    pub weak_match_penalty: f64,
    pub name_weight: f64,
    pub alias_weight: f64,
    pub category_weight: f64,
    pub category_only_threshold: f64,
    pub category_only_ceiling: f64,
    pub category_only_penalty: f64,
    pub missing_words_penalty: f64,
    pub relevance_threshold: f64,
}

impl ScoringParams {
    /// The tuned defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exact_match_bonus: EXACT_MATCH_BONUS,
            prefix_match_bonus: PREFIX_MATCH_BONUS,
            substring_match_bonus: SUBSTRING_MATCH_BONUS,
            subsequence_weight: SUBSEQUENCE_WEIGHT,
            similarity_weight: SIMILARITY_WEIGHT,
            word_match_weight: WORD_MATCH_WEIGHT,
            word_similarity_threshold: WORD_SIMILARITY_THRESHOLD,
            word_subsequence_threshold: WORD_SUBSEQUENCE_THRESHOLD,
            partial_words_penalty: PARTIAL_WORDS_PENALTY,
            weak_match_threshold: WEAK_MATCH_THRESHOLD,
            weak_match_penalty: WEAK_MATCH_PENALTY,
            name_weight: NAME_WEIGHT,
            alias_weight: ALIAS_WEIGHT,
            category_weight: CATEGORY_WEIGHT,
            category_only_threshold: CATEGORY_ONLY_THRESHOLD,
            category_only_ceiling: CATEGORY_ONLY_CEILING,
            category_only_penalty: CATEGORY_ONLY_PENALTY,
            missing_words_penalty: MISSING_WORDS_PENALTY,
            relevance_threshold: RELEVANCE_THRESHOLD,
        }
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::new()
    }
}
