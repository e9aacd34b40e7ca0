//! Data structures for the SimText similarity pipeline.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

/// Token -> relative frequency within one document.
///
/// Ordered so that iteration (and float summation) is identical on every run.
pub type TermFrequencyMap = BTreeMap<String, f64>;

/// Token -> `ln(N / df)` over the documents being compared.
pub type IdfTable = BTreeMap<String, f64>;

/// Unique character or word shingles of one document.
pub type ShingleSet = BTreeSet<String>;

/// A document loaded into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Basic statistics for a single document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize, // Never below 1
    pub unique_words: usize,
    pub average_words_per_sentence: f64,
    pub lexical_diversity: f64, // unique_words / word_count, 0 when empty
    pub top_words: Vec<String>,
}

/// Qualitative similarity level derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ConfidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "Very Low",
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
            ConfidenceLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combined verdict over the four similarity scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfidence {
    pub score: f64,
    pub level: ConfidenceLevel,
    pub interpretation: String,
    pub indicators: Vec<String>,
}

/// Best alignment found for one sentence of the reference document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceMatch {
    pub score: f64,
    pub sentence: String,      // Sentence from document A
    pub best_match: String,    // Its closest counterpart in document B
}

/// Similarity algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Cosine over term frequencies (default)
    #[default]
    Cosine,
    /// Cosine over IDF-weighted term frequencies
    Tfidf,
    /// Jaccard over character shingles
    JaccardChar,
    /// Jaccard over word shingles
    JaccardWord,
    /// Edit distance normalized by the longer text
    Levenshtein,
    /// The four core algorithms plus the confidence verdict
    All,
}

impl Algorithm {
    pub fn includes(&self, other: Algorithm) -> bool {
        match self {
            Algorithm::All => other != Algorithm::Levenshtein && other != Algorithm::All,
            _ => *self == other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Cosine => "Cosine",
            Algorithm::Tfidf => "TF-IDF",
            Algorithm::JaccardChar => "Jaccard (Character)",
            Algorithm::JaccardWord => "Jaccard (Word)",
            Algorithm::Levenshtein => "Levenshtein",
            Algorithm::All => "All",
        }
    }
}

/// Scores for the algorithms that were actually run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cosine: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tfidf: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jaccard_char: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jaccard_word: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levenshtein: Option<f64>,
}

impl SimilarityScores {
    /// Highest score among the computed algorithms, 0 when none ran.
    pub fn max_score(&self) -> f64 {
        [
            self.cosine,
            self.tfidf,
            self.jaccard_char,
            self.jaccard_word,
            self.levenshtein,
        ]
        .into_iter()
        .flatten()
        .fold(0.0, f64::max)
    }

    /// Score of a single algorithm. `All` maps to cosine.
    pub fn get(&self, algorithm: Algorithm) -> Option<f64> {
        match algorithm {
            Algorithm::Cosine | Algorithm::All => self.cosine,
            Algorithm::Tfidf => self.tfidf,
            Algorithm::JaccardChar => self.jaccard_char,
            Algorithm::JaccardWord => self.jaccard_word,
            Algorithm::Levenshtein => self.levenshtein,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("shingle size must be at least 1 (got {kind} size {value})")]
    ZeroShingleSize { kind: &'static str, value: usize },
    #[error("threshold must be within 0.0..=1.0 (got {0})")]
    ThresholdOutOfRange(f64),
}

/// Comparison parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParams {
    pub algorithm: Algorithm,
    pub char_shingle_size: usize,
    pub word_shingle_size: usize,
    pub threshold: f64,            // Pairs whose best score is below this are not reported
    pub ignore_stopwords: bool,
    pub align_sentences: bool,
    pub include_stats: bool,
    pub top_words: usize,
    pub show_timings: bool,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Cosine,
            char_shingle_size: 3,
            word_shingle_size: 3,
            threshold: 0.0,
            ignore_stopwords: false,
            align_sentences: false,
            include_stats: false,
            top_words: 5,
            show_timings: false,
        }
    }
}

impl ComparisonParams {
    /// Reject parameter combinations the engine cannot honor.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.char_shingle_size == 0 {
            return Err(ParamsError::ZeroShingleSize {
                kind: "character",
                value: self.char_shingle_size,
            });
        }
        if self.word_shingle_size == 0 {
            return Err(ParamsError::ZeroShingleSize {
                kind: "word",
                value: self.word_shingle_size,
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ParamsError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}

/// Result of comparing one pair of documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairComparison {
    pub document_a: String,
    pub document_b: String,
    pub scores: SimilarityScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<SimilarityConfidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_matches: Option<Vec<SentenceMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_a: Option<DocumentStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_b: Option<DocumentStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub documents: usize,
    pub pairs_compared: usize,
    pub pairs_reported: usize,
    pub highest_score: f64,            // Highest max_score among reported pairs
    pub highest_confidence: Option<ConfidenceLevel>,
}

/// Full comparison result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub version: String,
    pub parameters: ComparisonParams,
    pub documents: Vec<String>,
    pub summary: ComparisonSummary,
    pub pairs: Vec<PairComparison>,
}
