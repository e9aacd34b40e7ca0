//! Output formatting for comparison results (simple, detailed, JSON).

use crate::models::{
    Algorithm, ComparisonResult, DocumentStats, PairComparison, SentenceMatch,
    SimilarityConfidence,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How comparison results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One line per pair with the selected score
    #[default]
    Simple,
    /// Per-algorithm breakdown, verdict and optional extras
    Detailed,
    /// The full result as pretty-printed JSON
    Json,
}

/// Sentence matches shown per pair in detailed output.
const MAX_SENTENCE_MATCHES: usize = 10;

/// Write the comparison result in the requested format.
pub fn write_result<W: Write>(
    result: &ComparisonResult,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Json => write_json(result, writer),
        OutputFormat::Simple => {
            for pair in &result.pairs {
                writeln!(writer, "{}", format_simple(pair, result.parameters.algorithm))?;
            }
            Ok(())
        }
        OutputFormat::Detailed => {
            for pair in &result.pairs {
                write!(writer, "{}", format_detailed(pair))?;
            }
            write!(writer, "{}", format_summary(result))?;
            Ok(())
        }
    }
}

/// Write comparison result as JSON.
pub fn write_json<W: Write>(result: &ComparisonResult, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(result)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

fn percent(score: f64, precision: usize) -> String {
    format!("{:.*}%", precision, score * 100.0)
}

/// `a vs b: 87.5%`, using cosine when every algorithm was run.
pub fn format_simple(pair: &PairComparison, algorithm: Algorithm) -> String {
    let score = pair.scores.get(algorithm).unwrap_or(0.0);
    let mut line = format!(
        "{} vs {}: {}",
        pair.document_a,
        pair.document_b,
        percent(score, 1)
    );
    if let Some(ms) = pair.duration_ms {
        let _ = write!(line, " ({:.1}ms)", ms);
    }
    line
}

/// Multi-line breakdown for one pair.
pub fn format_detailed(pair: &PairComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Similarity Analysis ===");
    let _ = writeln!(out, "File 1: {}", pair.document_a);
    let _ = writeln!(out, "File 2: {}", pair.document_b);
    let _ = writeln!(out);

    let rows = [
        ("Cosine Similarity:", pair.scores.cosine),
        ("TF-IDF Similarity:", pair.scores.tfidf),
        ("Jaccard (Character):", pair.scores.jaccard_char),
        ("Jaccard (Word):", pair.scores.jaccard_word),
        ("Levenshtein:", pair.scores.levenshtein),
    ];
    for (label, score) in rows {
        if let Some(score) = score {
            let _ = writeln!(out, "{:<24}{}", label, percent(score, 2));
        }
    }
    if let Some(ms) = pair.duration_ms {
        let _ = writeln!(out, "{:<24}{:.2} ms", "Processing time:", ms);
    }
    let _ = writeln!(out);

    if let Some(confidence) = &pair.confidence {
        out.push_str(&format_confidence(confidence));
        let _ = writeln!(out);
    }

    if let Some(matches) = &pair.sentence_matches {
        out.push_str(&format_sentence_matches(matches, MAX_SENTENCE_MATCHES));
        let _ = writeln!(out);
    }

    if let (Some(stats_a), Some(stats_b)) = (&pair.stats_a, &pair.stats_b) {
        out.push_str(&format_stats(&pair.document_a, stats_a));
        out.push_str(&format_stats(&pair.document_b, stats_b));
        let _ = writeln!(out);
        if let Some(confidence) = &pair.confidence {
            out.push_str(&format_analysis_summary(stats_a, stats_b, confidence));
            let _ = writeln!(out);
        }
    }

    out
}

/// Confidence level, score, interpretation and indicators.
pub fn format_confidence(confidence: &SimilarityConfidence) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Confidence Level: {}", confidence.level);
    let _ = writeln!(out, "Overall Score: {}", percent(confidence.score, 1));
    let _ = writeln!(out, "Interpretation: {}", confidence.interpretation);
    if !confidence.indicators.is_empty() {
        let _ = writeln!(out, "Key Indicators:");
        for indicator in &confidence.indicators {
            let _ = writeln!(out, "  • {}", indicator);
        }
    }
    out
}

/// List the strongest sentence matches, up to `limit`.
pub fn format_sentence_matches(matches: &[SentenceMatch], limit: usize) -> String {
    let mut out = String::new();
    if matches.is_empty() {
        let _ = writeln!(out, "Similar Sentences: none above threshold");
        return out;
    }

    let _ = writeln!(out, "Similar Sentences:");
    for m in matches.iter().take(limit) {
        let _ = writeln!(out, "  [{}] {}", percent(m.score, 1), truncate(&m.sentence, 80));
        let _ = writeln!(out, "         ~ {}", truncate(&m.best_match, 80));
    }
    if matches.len() > limit {
        let _ = writeln!(out, "  ... and {} more", matches.len() - limit);
    }
    out
}

/// Truncate text for display.
fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Statistics block for one document.
pub fn format_stats(name: &str, stats: &DocumentStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", name);
    let _ = writeln!(out, "Words: {}", stats.word_count);
    let _ = writeln!(out, "Characters: {}", stats.character_count);
    let _ = writeln!(out, "Sentences: {}", stats.sentence_count);
    let _ = writeln!(out, "Unique words: {}", stats.unique_words);
    let _ = writeln!(
        out,
        "Avg words/sentence: {:.1}",
        stats.average_words_per_sentence
    );
    let _ = writeln!(out, "Lexical diversity: {:.3}", stats.lexical_diversity);
    if !stats.top_words.is_empty() {
        let _ = writeln!(out, "Top words: {}", stats.top_words.join(", "));
    }
    out
}

/// Side-by-side narrative for a pair: sizes, verdict and comparison notes.
pub fn format_analysis_summary(
    stats_a: &DocumentStats,
    stats_b: &DocumentStats,
    confidence: &SimilarityConfidence,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== ANALYSIS SUMMARY ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Document Comparison:");
    let _ = writeln!(
        out,
        "Document 1: {} words, {} sentences",
        stats_a.word_count, stats_a.sentence_count
    );
    let _ = writeln!(
        out,
        "Document 2: {} words, {} sentences",
        stats_b.word_count, stats_b.sentence_count
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Similarity Assessment:");
    out.push_str(&format_confidence(confidence));
    let _ = writeln!(out);

    let larger = stats_a.word_count.max(stats_b.word_count);
    let size_diff = if larger == 0 {
        0.0
    } else {
        stats_a.word_count.abs_diff(stats_b.word_count) as f64 / larger as f64
    };
    if size_diff < 0.1 {
        let _ = writeln!(out, "• Documents are similar in length");
    } else if size_diff > 0.5 {
        let _ = writeln!(out, "• Significant difference in document length");
    }

    if (stats_a.lexical_diversity - stats_b.lexical_diversity).abs() < 0.1 {
        let _ = writeln!(out, "• Similar vocabulary complexity");
    }

    out
}

/// Run-level summary appended to detailed output.
pub fn format_summary(result: &ComparisonResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Comparison Summary ===");
    let _ = writeln!(out, "Version: {}", result.version);
    let _ = writeln!(out, "Documents: {}", result.summary.documents);
    let _ = writeln!(out, "Algorithm: {}", result.parameters.algorithm.display_name());
    let _ = writeln!(
        out,
        "Shingle sizes: {} (character), {} (word)",
        result.parameters.char_shingle_size, result.parameters.word_shingle_size
    );
    let _ = writeln!(out, "Threshold: {}", percent(result.parameters.threshold, 1));
    let _ = writeln!(
        out,
        "Pairs reported: {} of {}",
        result.summary.pairs_reported, result.summary.pairs_compared
    );
    let _ = writeln!(out, "Highest score: {}", percent(result.summary.highest_score, 1));
    if let Some(level) = result.summary.highest_confidence {
        let _ = writeln!(out, "Highest confidence: {}", level);
    }
    out
}

/// Write per-document statistics, as text blocks or as a JSON object keyed
/// by document name.
pub fn write_stats<W: Write>(
    entries: &[(String, DocumentStats)],
    json: bool,
    writer: &mut W,
) -> Result<(), OutputError> {
    if json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(name, stats)| serde_json::to_value(stats).map(|value| (name.clone(), value)))
            .collect::<Result<_, serde_json::Error>>()?;
        let text = serde_json::to_string_pretty(&map)?;
        writeln!(writer, "{}", text)?;
    } else {
        for (name, stats) in entries {
            write!(writer, "{}", format_stats(name, stats))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::assess_confidence;
    use crate::models::{ComparisonParams, ComparisonSummary, SimilarityScores};

    fn sample_pair() -> PairComparison {
        PairComparison {
            document_a: "a.txt".to_string(),
            document_b: "b.txt".to_string(),
            scores: SimilarityScores {
                cosine: Some(0.875),
                tfidf: Some(0.25),
                jaccard_char: Some(0.6),
                jaccard_word: Some(0.4),
                levenshtein: None,
            },
            confidence: Some(assess_confidence(0.875, 0.25, 0.6, 0.4)),
            sentence_matches: None,
            stats_a: None,
            stats_b: None,
            duration_ms: None,
        }
    }

    fn sample_result() -> ComparisonResult {
        ComparisonResult {
            version: "0.0.0".to_string(),
            parameters: ComparisonParams {
                algorithm: Algorithm::All,
                ..Default::default()
            },
            documents: vec!["a.txt".to_string(), "b.txt".to_string()],
            summary: ComparisonSummary {
                documents: 2,
                pairs_compared: 1,
                pairs_reported: 1,
                highest_score: 0.875,
                highest_confidence: None,
            },
            pairs: vec![sample_pair()],
        }
    }

    #[test]
    fn test_format_simple() {
        let pair = sample_pair();
        assert_eq!(format_simple(&pair, Algorithm::Cosine), "a.txt vs b.txt: 87.5%");
        assert_eq!(format_simple(&pair, Algorithm::All), "a.txt vs b.txt: 87.5%");
        assert_eq!(format_simple(&pair, Algorithm::Tfidf), "a.txt vs b.txt: 25.0%");
    }

    #[test]
    fn test_format_simple_with_timing() {
        let mut pair = sample_pair();
        pair.duration_ms = Some(2.0);
        assert_eq!(
            format_simple(&pair, Algorithm::Cosine),
            "a.txt vs b.txt: 87.5% (2.0ms)"
        );
    }

    #[test]
    fn test_format_detailed_lists_computed_scores() {
        let text = format_detailed(&sample_pair());
        assert!(text.contains("Cosine Similarity:      87.50%"));
        assert!(text.contains("Jaccard (Word):"));
        assert!(!text.contains("Levenshtein"));
        assert!(text.contains("Confidence Level: Medium"));
    }

    #[test]
    fn test_write_json_roundtrips_scores() {
        let mut buffer = Vec::new();
        write_json(&sample_result(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["pairs"][0]["scores"]["cosine"], 0.875);
        assert!(value["pairs"][0]["scores"].get("levenshtein").is_none());
        assert_eq!(value["parameters"]["algorithm"], "all");
    }

    #[test]
    fn test_write_result_simple() {
        let mut buffer = Vec::new();
        write_result(&sample_result(), OutputFormat::Simple, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a.txt vs b.txt: 87.5%\n");
    }

    #[test]
    fn test_analysis_summary_notes() {
        let stats = DocumentStats {
            word_count: 100,
            sentence_count: 5,
            lexical_diversity: 0.5,
            ..Default::default()
        };
        let confidence = assess_confidence(1.0, 1.0, 1.0, 1.0);
        let text = format_analysis_summary(&stats, &stats, &confidence);

        assert!(text.contains("Document 1: 100 words, 5 sentences"));
        assert!(text.contains("Confidence Level: Very High"));
        assert!(text.contains("Documents are similar in length"));
        assert!(text.contains("Similar vocabulary complexity"));
    }

    #[test]
    fn test_analysis_summary_empty_documents() {
        let empty = DocumentStats {
            sentence_count: 1,
            ..Default::default()
        };
        let confidence = assess_confidence(0.0, 0.0, 1.0, 1.0);
        let text = format_analysis_summary(&empty, &empty, &confidence);
        assert!(text.contains("Documents are similar in length"));
    }

    #[test]
    fn test_write_stats_json() {
        let entries = vec![("a.txt".to_string(), DocumentStats::default())];
        let mut buffer = Vec::new();
        write_stats(&entries, true, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["a.txt"]["word_count"], 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer sentence", 10), "a much ...");
    }
}
