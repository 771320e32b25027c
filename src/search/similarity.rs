//! String similarity primitives
//!
//! Two building blocks used by the fuzzy scorer:
//!
//! - [`string_similarity`]: normalized Levenshtein similarity in `[0, 1]`
//! - [`ordered_subsequence_score`]: rewards queries whose characters appear
//!   in order in the haystack, favouring matches that complete early
//!
//! Both are case-insensitive and measure lengths in `char`s.

/// Levenshtein edit distance (unit cost insert, delete, substitute)
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized similarity between two strings
///
/// Returns `1 - distance / max_len` on the lowercased inputs. Identical
/// strings score 1; an empty input scores 0.
#[must_use]
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein_distance(&a, &b) as f64 / max_len as f64
}

/// Ordered subsequence match score
///
/// Scans the haystack once, advancing through the query every time the
/// current characters agree. If the whole query is consumed the score is
/// `haystack_len / (scan_end + 1)`, where `scan_end` is the scan position
/// just past the last matched character; otherwise 0.
///
/// An empty query scores 1, an empty haystack scores 0.
#[must_use]
pub fn ordered_subsequence_score(haystack: &str, query: &str) -> f64 {
    if query.is_empty() {
        return 1.0;
    }
    if haystack.is_empty() {
        return 0.0;
    }

    let haystack: Vec<char> = haystack.to_lowercase().chars().collect();
    let query: Vec<char> = query.to_lowercase().chars().collect();

    let mut scan = 0;
    let mut matched = 0;
    while scan < haystack.len() && matched < query.len() {
        if haystack[scan] == query[matched] {
            matched += 1;
        }
        scan += 1;
    }

    if matched == query.len() {
        haystack.len() as f64 / (scan + 1) as f64
    } else {
        0.0
    }
}
