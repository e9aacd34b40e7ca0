//! Term-frequency model.

use crate::models::TermFrequencyMap;

/// Relative frequency of every token; values sum to 1 for non-empty input.
pub fn term_frequency(tokens: &[String]) -> TermFrequencyMap {
    let mut tf = TermFrequencyMap::new();
    if tokens.is_empty() {
        return tf;
    }

    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }

    let total = tokens.len() as f64;
    for freq in tf.values_mut() {
        *freq /= total;
    }

    tf
}
