//! Sentence-level alignment between two documents.
//!
//! Every sentence of document A is compared (frequency cosine) against every
//! sentence of document B; only strong best matches are reported.

use crate::frequency::term_frequency;
use crate::models::{SentenceMatch, TermFrequencyMap};
use crate::similarity::cosine_similarity;
use crate::tokenize::tokenize;
use regex::Regex;
use std::sync::OnceLock;

/// Sentences of this many characters or fewer are dropped when splitting.
pub const MIN_SENTENCE_CHARS: usize = 5;

/// Sentences shorter than this take no part in alignment.
pub const MIN_ALIGNABLE_CHARS: usize = 10;

/// Best matches at or below this score are not reported.
pub const MATCH_THRESHOLD: f64 = 0.6;

/// Runs of sentence-terminating punctuation.
pub(crate) fn terminator_regex() -> &'static Regex {
    static TERMINATOR: OnceLock<Regex> = OnceLock::new();
    TERMINATOR.get_or_init(|| Regex::new(r"[.!?]+").expect("static regex is valid"))
}

/// Split text on runs of `.`, `!` and `?`, trimming each piece.
pub fn split_sentences(text: &str) -> Vec<String> {
    terminator_regex()
        .split(text)
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
        .map(String::from)
        .collect()
}

/// Find the best counterpart in `text_b` for each sentence of `text_a`.
///
/// Results are sorted by score, highest first. The sort is stable, so equal
/// scores keep the order in which their sentences appear in `text_a`.
pub fn align_sentences(text_a: &str, text_b: &str) -> Vec<SentenceMatch> {
    let candidates: Vec<(String, TermFrequencyMap)> = split_sentences(text_b)
        .into_iter()
        .filter(|sentence| is_alignable(sentence))
        .map(|sentence| {
            let tf = term_frequency(&tokenize(&sentence));
            (sentence, tf)
        })
        .collect();

    let mut matches: Vec<SentenceMatch> = split_sentences(text_a)
        .into_iter()
        .filter(|sentence| is_alignable(sentence))
        .filter_map(|sentence| {
            let tf = term_frequency(&tokenize(&sentence));
            best_match(&tf, &candidates).and_then(|(score, best)| {
                (score > MATCH_THRESHOLD).then(|| SentenceMatch {
                    score,
                    sentence,
                    best_match: best.to_string(),
                })
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

fn is_alignable(sentence: &str) -> bool {
    sentence.chars().count() >= MIN_ALIGNABLE_CHARS
}

/// Highest-scoring candidate; the first one wins on ties.
fn best_match<'a>(
    tf: &TermFrequencyMap,
    candidates: &'a [(String, TermFrequencyMap)],
) -> Option<(f64, &'a str)> {
    let mut best: Option<(f64, &str)> = None;
    for (sentence, candidate_tf) in candidates {
        let score = cosine_similarity(tf, candidate_tf);
        if best.map_or(score > 0.0, |(top, _)| score > top) {
            best = Some((score, sentence.as_str()));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("Hello world. This is great! Really?");
        assert_eq!(sentences, vec!["Hello world", "This is great", "Really"]);
    }

    #[test]
    fn test_split_sentences_drops_short_pieces() {
        let sentences = split_sentences("Ok. Fine!! This one stays... Hi?");
        assert_eq!(sentences, vec!["This one stays"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("...!?").is_empty());
    }

    #[test]
    fn test_align_identical_texts() {
        let text = "Cats sit on mats. Dogs are loyal animals! Birds can fly high.";
        let matches = align_sentences(text, text);

        assert_eq!(matches.len(), 3);
        for m in &matches {
            assert_eq!(m.score, 1.0);
            assert_eq!(m.sentence, m.best_match);
        }
        // Equal scores keep document order
        assert_eq!(matches[0].sentence, "Cats sit on mats");
        assert_eq!(matches[1].sentence, "Dogs are loyal animals");
        assert_eq!(matches[2].sentence, "Birds can fly high");
    }

    #[test]
    fn test_align_sorted_descending() {
        let a = "The quick brown fox jumps. Completely unrelated words here. \
                 The lazy dog sleeps all day long";
        let b = "The quick brown fox jumps. The lazy dog sleeps most of the day";
        let matches = align_sentences(a, b);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].sentence, "The quick brown fox jumps");
        assert!(matches[0].score >= matches[1].score);
        assert_eq!(matches[1].best_match, "The lazy dog sleeps most of the day");
    }

    #[test]
    fn test_align_skips_short_sentences() {
        // "Go home" is kept by the splitter but too short to align
        let matches = align_sentences("Go home. Go home.", "Go home. Go home.");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_align_no_similar_sentences() {
        let matches = align_sentences(
            "Apples grow on trees in autumn.",
            "Rockets launch into orbit quickly.",
        );
        assert!(matches.is_empty());
    }
}
