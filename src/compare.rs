//! Pairwise comparison orchestration.
//!
//! This module coordinates a full comparison run: per-document feature
//! extraction, scoring of every document pair, threshold filtering and the
//! summary.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::confidence::assess_confidence;
use crate::frequency::term_frequency;
use crate::loader::{load_documents, load_stopwords, LoadError};
use crate::models::*;
use crate::sentence::align_sentences;
use crate::shingle::{character_shingles, jaccard_similarity, word_shingles};
use crate::similarity::{
    compute_idf, cosine_similarity, levenshtein_similarity, tfidf_cosine_similarity,
};
use crate::stats::analyze_document_with_top;
use crate::tokenize::TokenizerConfig;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),
    #[error("at least two documents are required (got {0})")]
    NotEnoughDocuments(usize),
}

/// Everything about one document that pair scoring needs, computed once.
#[derive(Debug, Clone)]
pub struct DocumentFeatures {
    pub term_frequency: TermFrequencyMap,
    pub char_shingles: Option<ShingleSet>,
    pub word_shingles: Option<ShingleSet>,
    pub stats: Option<DocumentStats>,
}

impl DocumentFeatures {
    pub fn extract(text: &str, params: &ComparisonParams, tokenizer: &TokenizerConfig) -> Self {
        let algorithm = params.algorithm;
        let tokens = tokenizer.process_text(text);
        let term_frequency = term_frequency(&tokens);

        let char_shingles = algorithm
            .includes(Algorithm::JaccardChar)
            .then(|| character_shingles(text, params.char_shingle_size));
        let word_shingles = algorithm
            .includes(Algorithm::JaccardWord)
            .then(|| word_shingles(&tokens, params.word_shingle_size));
        let stats = params
            .include_stats
            .then(|| analyze_document_with_top(text, &tokens, params.top_words));

        Self {
            term_frequency,
            char_shingles,
            word_shingles,
            stats,
        }
    }
}

/// Score one pair of documents whose features are already extracted.
pub fn compare_features(
    doc_a: &Document,
    doc_b: &Document,
    features_a: &DocumentFeatures,
    features_b: &DocumentFeatures,
    params: &ComparisonParams,
) -> PairComparison {
    let start = Instant::now();
    let algorithm = params.algorithm;
    let mut scores = SimilarityScores::default();

    if algorithm.includes(Algorithm::Cosine) {
        scores.cosine = Some(cosine_similarity(
            &features_a.term_frequency,
            &features_b.term_frequency,
        ));
    }

    if algorithm.includes(Algorithm::Tfidf) {
        let (tf_a, tf_b) = (&features_a.term_frequency, &features_b.term_frequency);
        let idf = compute_idf([tf_a, tf_b]);
        scores.tfidf = Some(tfidf_cosine_similarity(tf_a, tf_b, &idf));
    }

    if let (Some(a), Some(b)) = (&features_a.char_shingles, &features_b.char_shingles) {
        scores.jaccard_char = Some(jaccard_similarity(a, b));
    }

    if let (Some(a), Some(b)) = (&features_a.word_shingles, &features_b.word_shingles) {
        scores.jaccard_word = Some(jaccard_similarity(a, b));
    }

    if algorithm.includes(Algorithm::Levenshtein) {
        scores.levenshtein = Some(levenshtein_similarity(&doc_a.text, &doc_b.text));
    }

    let confidence = match (
        scores.cosine,
        scores.tfidf,
        scores.jaccard_char,
        scores.jaccard_word,
    ) {
        (Some(cosine), Some(tfidf), Some(jaccard_char), Some(jaccard_word)) => {
            Some(assess_confidence(cosine, tfidf, jaccard_char, jaccard_word))
        }
        _ => None,
    };

    let sentence_matches = params
        .align_sentences
        .then(|| align_sentences(&doc_a.text, &doc_b.text));

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    PairComparison {
        document_a: doc_a.name.clone(),
        document_b: doc_b.name.clone(),
        scores,
        confidence,
        sentence_matches,
        stats_a: features_a.stats.clone(),
        stats_b: features_b.stats.clone(),
        duration_ms: params.show_timings.then_some(elapsed_ms),
    }
}

/// Compare two raw texts with the given parameters.
pub fn compare_texts(
    text_a: &str,
    text_b: &str,
    params: &ComparisonParams,
    tokenizer: &TokenizerConfig,
) -> Result<PairComparison, ParamsError> {
    params.validate()?;

    let doc_a = Document::new("document_a", text_a);
    let doc_b = Document::new("document_b", text_b);
    let features_a = DocumentFeatures::extract(text_a, params, tokenizer);
    let features_b = DocumentFeatures::extract(text_b, params, tokenizer);

    Ok(compare_features(&doc_a, &doc_b, &features_a, &features_b, params))
}

/// Load documents (and optionally a stopword list) from disk and compare
/// every pair.
pub fn compare_files<P: AsRef<Path>>(
    paths: &[P],
    stopwords_path: Option<&Path>,
    params: &ComparisonParams,
    show_progress: bool,
) -> Result<ComparisonResult, CompareError> {
    params.validate()?;
    if paths.len() < 2 {
        return Err(CompareError::NotEnoughDocuments(paths.len()));
    }

    let stopwords = match stopwords_path {
        Some(path) => load_stopwords(path)?,
        None => Default::default(),
    };
    if params.ignore_stopwords && stopwords.is_empty() {
        warn!("stopword filtering requested but the stopword list is empty");
    }
    let tokenizer = TokenizerConfig::new(stopwords, params.ignore_stopwords);

    info!(documents = paths.len(), "loading documents");
    let documents = load_documents(paths)?;

    compare_documents(&documents, params, &tokenizer, show_progress)
}

/// Compare every pair of documents (i < j).
///
/// Pairs are scored in parallel but reported in input order. Pairs whose
/// best score falls below `params.threshold` are left out.
pub fn compare_documents(
    documents: &[Document],
    params: &ComparisonParams,
    tokenizer: &TokenizerConfig,
    show_progress: bool,
) -> Result<ComparisonResult, CompareError> {
    params.validate()?;
    if documents.len() < 2 {
        return Err(CompareError::NotEnoughDocuments(documents.len()));
    }

    let features: Vec<DocumentFeatures> = documents
        .par_iter()
        .map(|doc| DocumentFeatures::extract(&doc.text, params, tokenizer))
        .collect();

    let pair_indices = all_pairs(documents.len());
    debug!(
        pairs = pair_indices.len(),
        algorithm = ?params.algorithm,
        "scoring document pairs"
    );

    let progress = if show_progress && pair_indices.len() > 1 {
        let pb = ProgressBar::new(pair_indices.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )
                .expect("static progress template is valid")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let compared: Vec<PairComparison> = pair_indices
        .par_iter()
        .map(|&(i, j)| {
            let pair =
                compare_features(&documents[i], &documents[j], &features[i], &features[j], params);
            if let Some(ref pb) = progress {
                pb.inc(1);
            }
            pair
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    let pairs_compared = compared.len();
    let pairs: Vec<PairComparison> = compared
        .into_iter()
        .filter(|pair| pair.scores.max_score() >= params.threshold)
        .collect();

    if pairs.len() != pairs_compared {
        info!(
            reported = pairs.len(),
            compared = pairs_compared,
            threshold = params.threshold,
            "pairs below threshold were dropped"
        );
    }

    let summary = ComparisonSummary {
        documents: documents.len(),
        pairs_compared,
        pairs_reported: pairs.len(),
        highest_score: pairs
            .iter()
            .map(|p| p.scores.max_score())
            .fold(0.0, f64::max),
        highest_confidence: pairs
            .iter()
            .filter_map(|p| p.confidence.as_ref().map(|c| c.level))
            .max(),
    };

    Ok(ComparisonResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        parameters: params.clone(),
        documents: documents.iter().map(|d| d.name.clone()).collect(),
        summary,
        pairs,
    })
}

/// Every index pair (i, j) with i < j, in lexicographic order.
fn all_pairs(count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(count * count.saturating_sub(1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push((i, j));
        }
    }
    pairs
}
