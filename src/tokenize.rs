//! Word tokenization and stopword filtering.
//!
//! Tokens are whitespace-delimited units with a fixed set of punctuation
//! stripped from both ends, lowercased. Internal punctuation is kept, so
//! "can't" is a single token.

use crate::frequency::term_frequency;
use crate::models::TermFrequencyMap;
use std::collections::HashSet;

/// Characters stripped from the start and end of every token.
pub const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', '"', '\'', '(', ')', ';', ':'];

/// Split text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|unit| unit.trim_matches(EDGE_PUNCTUATION))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Remove every token present in the stopword set, keeping order.
pub fn filter_stopwords(tokens: Vec<String>, stopwords: &Stopwords) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}

/// Read-only set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Parse a stopword list with one word per line.
    ///
    /// Surrounding whitespace is trimmed, blank lines are skipped and every
    /// word is lowercased.
    pub fn parse(source: &str) -> Self {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for Stopwords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Tokenizer configuration shared by every comparison in a session.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    pub stopwords: Stopwords,
    pub ignore_stopwords: bool,
}

impl TokenizerConfig {
    pub fn new(stopwords: Stopwords, ignore_stopwords: bool) -> Self {
        Self {
            stopwords,
            ignore_stopwords,
        }
    }

    /// Tokenize and, if enabled, drop stopwords.
    pub fn process_text(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        if self.ignore_stopwords {
            filter_stopwords(tokens, &self.stopwords)
        } else {
            tokens
        }
    }

    pub fn term_frequency_map(&self, text: &str) -> TermFrequencyMap {
        term_frequency(&self.process_text(text))
    }
}
