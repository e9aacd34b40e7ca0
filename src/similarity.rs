//! Vector-space and edit-distance similarity measures.
//!
//! Cosine and TF-IDF cosine operate on term-frequency maps. Because the maps
//! are ordered, summation order depends only on the key set, which makes
//! both measures exactly symmetric in their arguments.

use crate::confidence::assess_confidence;
use crate::models::{Algorithm, ComparisonParams, IdfTable, ParamsError, TermFrequencyMap};
use crate::shingle::{character_shingles, jaccard_similarity, word_shingles};
use crate::tokenize::TokenizerConfig;
use std::collections::BTreeMap;

/// Cosine similarity between two term-frequency maps.
///
/// Returns 0 when either map has zero magnitude, so two empty documents are
/// not reported as similar. A non-empty map compared with itself scores
/// exactly 1.0.
pub fn cosine_similarity(tf1: &TermFrequencyMap, tf2: &TermFrequencyMap) -> f64 {
    let norm1 = squared_norm(tf1);
    let norm2 = squared_norm(tf2);
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map; the shared keys (and their order) are the same
    // either way.
    let (small, large) = if tf1.len() <= tf2.len() {
        (tf1, tf2)
    } else {
        (tf2, tf1)
    };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, freq)| large.get(term).map(|other| freq * other))
        .sum();

    // For identical maps dot == norm and sqrt(norm * norm) rounds back to
    // norm, so the ratio is exactly 1. The clamp absorbs rounding elsewhere.
    (dot / (norm1 * norm2).sqrt()).min(1.0)
}

fn squared_norm(tf: &TermFrequencyMap) -> f64 {
    tf.values().map(|freq| freq * freq).sum()
}

/// Inverse document frequency over exactly the documents being compared.
///
/// `idf = ln(N / df)`: with two documents, every token they share gets 0.
/// Only tokens present in at least one document get an entry.
pub fn compute_idf<'a, I>(documents: I) -> IdfTable
where
    I: IntoIterator<Item = &'a TermFrequencyMap>,
{
    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    let mut n = 0usize;
    for tf in documents {
        n += 1;
        for term in tf.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = n as f64;
    document_frequency
        .into_iter()
        .map(|(term, df)| (term.to_string(), (n / df as f64).ln()))
        .collect()
}

/// Cosine similarity after weighting every frequency by its token's IDF.
///
/// Tokens missing from `idf` weigh 0.
pub fn tfidf_cosine_similarity(
    tf1: &TermFrequencyMap,
    tf2: &TermFrequencyMap,
    idf: &IdfTable,
) -> f64 {
    cosine_similarity(&apply_idf(tf1, idf), &apply_idf(tf2, idf))
}

fn apply_idf(tf: &TermFrequencyMap, idf: &IdfTable) -> TermFrequencyMap {
    tf.iter()
        .map(|(term, freq)| (term.clone(), freq * idf.get(term).copied().unwrap_or(0.0)))
        .collect()
}

/// Edit distance between two strings, counted in Unicode scalar values.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows are enough: row i only depends on row i - 1
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `1 - distance / max(len_a, len_b)`; two empty strings are identical.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// Compute a single similarity score between two raw texts.
///
/// `Algorithm::All` returns the composite confidence score. Parameters are
/// validated first, so a zero shingle width is an error rather than a panic.
pub fn calculate_similarity(
    text_a: &str,
    text_b: &str,
    algorithm: Algorithm,
    params: &ComparisonParams,
    tokenizer: &TokenizerConfig,
) -> Result<f64, ParamsError> {
    params.validate()?;
    Ok(score_texts(text_a, text_b, algorithm, params, tokenizer))
}

fn score_texts(
    text_a: &str,
    text_b: &str,
    algorithm: Algorithm,
    params: &ComparisonParams,
    tokenizer: &TokenizerConfig,
) -> f64 {
    match algorithm {
        Algorithm::Cosine => cosine_similarity(
            &tokenizer.term_frequency_map(text_a),
            &tokenizer.term_frequency_map(text_b),
        ),
        Algorithm::Tfidf => {
            let tf_a = tokenizer.term_frequency_map(text_a);
            let tf_b = tokenizer.term_frequency_map(text_b);
            let idf = compute_idf([&tf_a, &tf_b]);
            tfidf_cosine_similarity(&tf_a, &tf_b, &idf)
        }
        Algorithm::JaccardChar => jaccard_similarity(
            &character_shingles(text_a, params.char_shingle_size),
            &character_shingles(text_b, params.char_shingle_size),
        ),
        Algorithm::JaccardWord => jaccard_similarity(
            &word_shingles(&tokenizer.process_text(text_a), params.word_shingle_size),
            &word_shingles(&tokenizer.process_text(text_b), params.word_shingle_size),
        ),
        Algorithm::Levenshtein => levenshtein_similarity(text_a, text_b),
        Algorithm::All => {
            let score = |alg| score_texts(text_a, text_b, alg, params, tokenizer);
            assess_confidence(
                score(Algorithm::Cosine),
                score(Algorithm::Tfidf),
                score(Algorithm::JaccardChar),
                score(Algorithm::JaccardWord),
            )
            .score
        }
    }
}
