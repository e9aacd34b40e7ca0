//! SimText Similarity Library
//!
//! Measures textual similarity between documents with several independent
//! algorithms (frequency cosine, TF-IDF cosine, character- and word-shingle
//! Jaccard) and combines them into a qualitative confidence verdict.
//!
//! # Example
//!
//! ```
//! use simtext::prelude::*;
//!
//! let tokenizer = TokenizerConfig::default();
//! let tf_a = tokenizer.term_frequency_map("The cat sat on the mat.");
//! let tf_b = tokenizer.term_frequency_map("The cat sat on a mat.");
//! let idf = compute_idf([&tf_a, &tf_b]);
//!
//! let cosine = cosine_similarity(&tf_a, &tf_b);
//! let tfidf = tfidf_cosine_similarity(&tf_a, &tf_b, &idf);
//! let jaccard_char = jaccard_similarity(
//!     &character_shingles("The cat sat on the mat.", 3),
//!     &character_shingles("The cat sat on a mat.", 3),
//! );
//! let jaccard_word = jaccard_similarity(
//!     &word_shingles(&tokenize("The cat sat on the mat."), 3),
//!     &word_shingles(&tokenize("The cat sat on a mat."), 3),
//! );
//!
//! let verdict = assess_confidence(cosine, tfidf, jaccard_char, jaccard_word);
//! println!("{}: {}", verdict.level, verdict.interpretation);
//! ```
//!
//! # Comparing files
//!
//! ```no_run
//! use simtext::prelude::*;
//! use std::path::Path;
//!
//! let params = ComparisonParams {
//!     algorithm: Algorithm::All,
//!     ..Default::default()
//! };
//! let paths = [Path::new("essay1.txt"), Path::new("essay2.txt")];
//! let result = compare_files(&paths, None, &params, false).unwrap();
//!
//! for pair in &result.pairs {
//!     println!("{}", format_simple(pair, params.algorithm));
//! }
//! ```

pub mod compare;
pub mod confidence;
pub mod frequency;
pub mod loader;
pub mod models;
pub mod output;
pub mod sentence;
pub mod shingle;
pub mod similarity;
pub mod stats;
pub mod tokenize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compare::{
        compare_documents, compare_features, compare_files, compare_texts, CompareError,
        DocumentFeatures,
    };
    pub use crate::confidence::{assess_confidence, composite_score};
    pub use crate::frequency::term_frequency;
    pub use crate::loader::{load_document, load_documents, load_stopwords, LoadError};
    pub use crate::models::{
        Algorithm, ComparisonParams, ComparisonResult, ComparisonSummary, ConfidenceLevel,
        Document, DocumentStats, IdfTable, PairComparison, ParamsError, SentenceMatch,
        ShingleSet, SimilarityConfidence, SimilarityScores, TermFrequencyMap,
    };
    pub use crate::output::{
        format_analysis_summary, format_confidence, format_detailed, format_simple,
        format_stats, write_json, write_result, write_stats, OutputError, OutputFormat,
    };
    pub use crate::sentence::{align_sentences, split_sentences};
    pub use crate::shingle::{character_shingles, jaccard_similarity, normalize_text, word_shingles};
    pub use crate::similarity::{
        calculate_similarity, compute_idf, cosine_similarity, levenshtein_distance,
        levenshtein_similarity, tfidf_cosine_similarity,
    };
    pub use crate::stats::{analyze_document, analyze_document_with_top, count_sentences};
    pub use crate::tokenize::{filter_stopwords, tokenize, Stopwords, TokenizerConfig};
}

// Re-export commonly used types at the crate root
pub use models::{
    Algorithm, ComparisonParams, ComparisonResult, ConfidenceLevel, PairComparison,
    SimilarityConfidence,
};
