//! Relevance scoring.
//!
//! `weight` is the full score in `[-1, 1]`, built on normalized Levenshtein
//! similarity. Queries shorter than the key are also compared against every
//! key window of the query's length, so `sol` finds `X1-SOL-A`; that partial
//! score is discounted by how much of the key the query covers.
//!
//! `quick_weight` is the cheap pre-filter. It only counts shared characters,
//! which caps the edit-distance similarity from above:
//!
//! ```text
//! levenshtein(a, b) >= max(|a|, |b|) - common_chars(a, b)
//! ```
//!
//! so `weight(q, k) > -0.5` always implies `quick_weight(q, k) > 0`.

use std::collections::HashMap;
use strsim::{levenshtein, normalized_levenshtein};

// Keeps the bound above the exact score when both land on the same float
const BOUND_SLACK: f64 = 1e-9;

/// Full relevance score in `[-1, 1]`; identical strings score 1
pub fn weight(query: &str, key: &str) -> f64 {
    2.0 * similarity(query, key) - 1.0
}

/// Cheap upper-bound-style score; never below `weight(q, k) + 0.5`
pub fn quick_weight(query: &str, key: &str) -> f64 {
    2.0 * similarity_bound(query, key) - 0.5
}

/// Case-insensitive similarity in `[0, 1]`
pub fn similarity(query: &str, key: &str) -> f64 {
    let query = query.to_lowercase();
    let key = key.to_lowercase();

    let q_len = query.chars().count();
    let k_len = key.chars().count();
    if q_len == 0 {
        return 1.0;
    }
    if k_len == 0 {
        return 0.0;
    }

    let ratio = normalized_levenshtein(&query, &key);
    if q_len >= k_len {
        return ratio;
    }

    let key_chars: Vec<char> = key.chars().collect();
    let best_distance = key_chars
        .windows(q_len)
        .map(|window| levenshtein(&query, &window.iter().collect::<String>()))
        .min()
        .unwrap_or(q_len);
    let partial = 1.0 - best_distance as f64 / q_len as f64;
    let coverage = 0.5 + 0.5 * q_len as f64 / k_len as f64;

    ratio.max(partial * coverage)
}

/// Upper bound of [`similarity`] from the multiset of shared characters
pub fn similarity_bound(query: &str, key: &str) -> f64 {
    let query = query.to_lowercase();
    let key = key.to_lowercase();

    let q_len = query.chars().count();
    let k_len = key.chars().count();
    if q_len == 0 {
        return 1.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in key.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let mut common = 0usize;
    for c in query.chars() {
        if let Some(n) = counts.get_mut(&c) {
            if *n > 0 {
                *n -= 1;
                common += 1;
            }
        }
    }

    let common = common as f64;
    let bound = if q_len >= k_len {
        common / q_len as f64
    } else {
        0.5 * common / q_len as f64 + 0.5 * common / k_len as f64
    };
    bound + BOUND_SLACK
}
