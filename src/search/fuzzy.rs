//! Composite fuzzy scoring
//!
//! [`fuzzy_score`] combines exact/prefix/substring bonuses, ordered
//! subsequence matching, edit-distance similarity and per-word coverage
//! into one relevance number. Scores are not bounded to `[0, 1]`: an exact
//! match of a single word lands around 1.75.

use super::params::ScoringParams;
use super::similarity::{ordered_subsequence_score, string_similarity};

/// Score `text` against `query` with the default parameters
///
/// An empty query scores 1; an empty text scores 0.
#[must_use]
pub fn fuzzy_score(text: &str, query: &str) -> f64 {
    fuzzy_score_with(text, query, &ScoringParams::default())
}

/// Score `text` against `query` with explicit parameters
#[must_use]
pub fn fuzzy_score_with(text: &str, query: &str, params: &ScoringParams) -> f64 {
    if query.is_empty() {
        return 1.0;
    }
    if text.is_empty() {
        return 0.0;
    }

    let text = text.to_lowercase();
    let query = query.to_lowercase();

    let mut score = if text == query {
        params.exact_match_bonus
    } else if text.starts_with(&query) {
        params.prefix_match_bonus
    } else if text.contains(&query) {
        params.substring_match_bonus
    } else {
        0.0
    };

    score += ordered_subsequence_score(&text, &query) * params.subsequence_weight;
    score += string_similarity(&text, &query) * params.similarity_weight;

    let text_words = split_words(&text);
    let query_words = split_words(&query);

    let matched = query_words
        .iter()
        .filter(|query_word| {
            text_words
                .iter()
                .any(|text_word| word_matches(text_word, query_word, params))
        })
        .count();

    if !query_words.is_empty() {
        score += matched as f64 / query_words.len() as f64 * params.word_match_weight;
    }

    if query_words.len() > 1 && matched < query_words.len() {
        score *= params.partial_words_penalty;
    }

    if score < params.weak_match_threshold {
        score *= params.weak_match_penalty;
    }

    score
}

/// Split on runs of whitespace
///
/// Leading and trailing runs produce one empty word each, so `"git "` is
/// `["git", ""]` and `"   "` is `["", ""]`. An empty word is contained in
/// every text word.
pub(crate) fn split_words(s: &str) -> Vec<&str> {
    let fragments: Vec<&str> = s.split(char::is_whitespace).collect();
    let last = fragments.len().saturating_sub(1);
    fragments
        .into_iter()
        .enumerate()
        .filter(|&(i, word)| !word.is_empty() || i == 0 || i == last)
        .map(|(_, word)| word)
        .collect()
}

fn word_matches(text_word: &str, query_word: &str, params: &ScoringParams) -> bool {
    text_word.contains(query_word)
        || string_similarity(text_word, query_word) > params.word_similarity_threshold
        || ordered_subsequence_score(text_word, query_word) > params.word_subsequence_threshold
}
