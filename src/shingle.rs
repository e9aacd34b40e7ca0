//! Character and word shingling, and Jaccard similarity over shingle sets.
//!
//! A shingle is a fixed-width overlapping n-gram. Both generators degenerate
//! to a single shingle holding the whole input when it is shorter than the
//! window, so a non-empty document always yields a non-empty set.

use crate::models::ShingleSet;

/// Lowercase alphanumerics, collapse whitespace runs to one space, drop
/// everything else.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut in_space = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            normalized.extend(c.to_lowercase());
            in_space = false;
        } else if c.is_whitespace() && !in_space {
            normalized.push(' ');
            in_space = true;
        }
    }

    normalized
}

/// Generate width-`w` character shingles from normalized text.
///
/// `w` must be at least 1.
pub fn character_shingles(text: &str, w: usize) -> ShingleSet {
    debug_assert!(w >= 1, "shingle width must be at least 1");
    let normalized = normalize_text(text);
    let chars: Vec<char> = normalized.chars().collect();

    if chars.len() < w {
        return ShingleSet::from([normalized]);
    }

    chars
        .windows(w)
        .filter(|window| window.iter().any(|&c| c != ' '))
        .map(|window| window.iter().collect::<String>())
        .collect()
}

/// Generate width-`w` word shingles, joining tokens with a single space.
///
/// `w` must be at least 1.
pub fn word_shingles(tokens: &[String], w: usize) -> ShingleSet {
    debug_assert!(w >= 1, "shingle width must be at least 1");
    if tokens.len() < w {
        return ShingleSet::from([tokens.join(" ")]);
    }

    tokens.windows(w).map(|window| window.join(" ")).collect()
}

/// Jaccard similarity between two shingle sets.
///
/// Two empty sets are identical by definition (1.0); exactly one empty set
/// shares nothing (0.0).
pub fn jaccard_similarity(shingles_a: &ShingleSet, shingles_b: &ShingleSet) -> f64 {
    if shingles_a.is_empty() && shingles_b.is_empty() {
        return 1.0;
    }
    if shingles_a.is_empty() || shingles_b.is_empty() {
        return 0.0;
    }

    let intersection = shingles_a.intersection(shingles_b).count();
    let union = shingles_a.len() + shingles_b.len() - intersection;

    intersection as f64 / union as f64
}
