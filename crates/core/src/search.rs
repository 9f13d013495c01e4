//! Typo-tolerant product search.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer and any future CLI tooling.

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Minimum normalized similarity (exclusive) for a fuzzy match to be kept.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.6;

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Rank `items` against `query` by the name each item exposes via `name_of`.
///
/// - An empty or whitespace-only query returns the items unchanged.
/// - Items whose name equals or contains the query (case-insensitive) come
///   first, in their original order.
/// - Remaining items are scored by normalized edit-distance similarity and
///   kept only above [`FUZZY_SIMILARITY_THRESHOLD`], sorted by descending
///   similarity. Ties retain their original relative order.
///
/// The two buckets are disjoint: a substring match is never fuzzy-scored.
pub fn rank_by_name<T, F>(items: Vec<T>, query: &str, name_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if query.trim().is_empty() {
        return items;
    }

    let normalized_query = query.to_lowercase();

    let mut exact_matches = Vec::new();
    let mut fuzzy_matches: Vec<(T, f64)> = Vec::new();

    for item in items {
        let normalized_name = name_of(&item).to_lowercase();

        if normalized_name.contains(&normalized_query) {
            exact_matches.push(item);
        } else {
            let score = similarity(&normalized_query, &normalized_name);
            if score > FUZZY_SIMILARITY_THRESHOLD {
                fuzzy_matches.push((item, score));
            }
        }
    }

    // sort_by is stable, so equal scores keep corpus order.
    fuzzy_matches.sort_by(|a, b| b.1.total_cmp(&a.1));

    exact_matches.extend(fuzzy_matches.into_iter().map(|(item, _)| item));
    exact_matches
}

/// Check whether `candidate` collides with any of `names` case-insensitively.
///
/// Shared by the duplicate pre-checks for tag and product creation.
pub fn name_taken<'a>(names: impl IntoIterator<Item = &'a str>, candidate: &str) -> bool {
    let normalized = candidate.to_lowercase();
    names
        .into_iter()
        .any(|name| name.to_lowercase() == normalized)
}

// ---------------------------------------------------------------------------
// Similarity scoring
// ---------------------------------------------------------------------------

/// Normalized Levenshtein similarity between two strings in `[0, 1]`:
/// `1 - distance / max(len_a, len_b)`, with unit-cost single-character
/// insert, delete, and substitute. Two empty strings score a perfect 1.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
