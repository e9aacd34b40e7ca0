//! Per-document statistics.

use crate::frequency::term_frequency;
use crate::models::{DocumentStats, TermFrequencyMap};
use crate::sentence::terminator_regex;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Number of top words reported by [`analyze_document`].
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Calculate statistics for a document and its tokens.
pub fn analyze_document(text: &str, tokens: &[String]) -> DocumentStats {
    analyze_document_with_top(text, tokens, DEFAULT_TOP_WORDS)
}

/// Calculate statistics, reporting the `top_n` most frequent tokens.
pub fn analyze_document_with_top(text: &str, tokens: &[String], top_n: usize) -> DocumentStats {
    let word_count = tokens.len();
    let sentence_count = count_sentences(text);
    let unique_words = tokens.iter().collect::<HashSet<_>>().len();

    DocumentStats {
        word_count,
        character_count: text.chars().count(),
        sentence_count,
        unique_words,
        average_words_per_sentence: word_count as f64 / sentence_count as f64,
        lexical_diversity: if word_count == 0 {
            0.0
        } else {
            unique_words as f64 / word_count as f64
        },
        top_words: top_words(&term_frequency(tokens), top_n),
    }
}

/// Count runs of terminal punctuation; a document always has at least one
/// sentence.
pub fn count_sentences(text: &str) -> usize {
    terminator_regex().find_iter(text).count().max(1)
}

/// The `n` most frequent terms, ties broken alphabetically.
pub fn top_words(tf: &TermFrequencyMap, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, f64)> = tf.iter().map(|(term, &freq)| (term, freq)).collect();
    ranked.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });

    ranked
        .into_iter()
        .take(n)
        .map(|(term, _)| term.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn test_empty_document() {
        let stats = analyze_document("", &[]);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.unique_words, 0);
        assert_eq!(stats.average_words_per_sentence, 0.0);
        assert_eq!(stats.lexical_diversity, 0.0);
        assert!(stats.top_words.is_empty());
    }

    #[test]
    fn test_basic_document() {
        let text = "The cat sat. The cat ran! Why?";
        let stats = analyze_document(text, &tokenize(text));

        assert_eq!(stats.word_count, 7);
        assert_eq!(stats.character_count, text.len());
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.unique_words, 5);
        assert!((stats.average_words_per_sentence - 7.0 / 3.0).abs() < 1e-9);
        assert!((stats.lexical_diversity - 5.0 / 7.0).abs() < 1e-9);
        assert_eq!(stats.top_words, vec!["cat", "the", "ran", "sat", "why"]);
    }

    #[test]
    fn test_sentence_count_punctuation_runs() {
        assert_eq!(count_sentences("Wait... what?! Yes."), 3);
        assert_eq!(count_sentences("no terminal punctuation"), 1);
    }

    #[test]
    fn test_character_count_uses_raw_text() {
        let text = "  Héllo,   wörld!  ";
        let stats = analyze_document(text, &tokenize(text));
        assert_eq!(stats.character_count, 19);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn test_top_words_limit_and_ties() {
        let tokens = tokenize("b a c b a d");
        let stats = analyze_document_with_top("b a c b a d", &tokens, 3);
        assert_eq!(stats.top_words, vec!["a", "b", "c"]);
    }
}
