//! Combine the four similarity scores into a qualitative verdict.

use crate::models::{ConfidenceLevel, SimilarityConfidence};

pub const WEIGHT_COSINE: f64 = 0.4;
pub const WEIGHT_JACCARD_CHAR: f64 = 0.3;
pub const WEIGHT_JACCARD_WORD: f64 = 0.2;
pub const WEIGHT_TFIDF: f64 = 0.1;

/// Inclusive lower bounds of each level on the composite score.
pub const THRESHOLD_VERY_HIGH: f64 = 0.85;
pub const THRESHOLD_HIGH: f64 = 0.70;
pub const THRESHOLD_MEDIUM: f64 = 0.50;
pub const THRESHOLD_LOW: f64 = 0.30;

/// Per-algorithm indicator thresholds (strict), independent of the level.
pub const INDICATOR_COSINE: f64 = 0.8;
pub const INDICATOR_JACCARD_CHAR: f64 = 0.7;
pub const INDICATOR_JACCARD_WORD: f64 = 0.6;
pub const INDICATOR_TFIDF: f64 = 0.5;

/// Weighted composite of the four scores, kept within [0, 1].
pub fn composite_score(cosine: f64, tfidf: f64, jaccard_char: f64, jaccard_word: f64) -> f64 {
    let score = WEIGHT_COSINE * cosine
        + WEIGHT_JACCARD_CHAR * jaccard_char
        + WEIGHT_JACCARD_WORD * jaccard_word
        + WEIGHT_TFIDF * tfidf;
    score.min(1.0)
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= THRESHOLD_VERY_HIGH {
            ConfidenceLevel::VeryHigh
        } else if score >= THRESHOLD_HIGH {
            ConfidenceLevel::High
        } else if score >= THRESHOLD_MEDIUM {
            ConfidenceLevel::Medium
        } else if score >= THRESHOLD_LOW {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryHigh => {
                "Extremely high similarity - likely identical or near-identical content"
            }
            ConfidenceLevel::High => "High similarity - significant content overlap detected",
            ConfidenceLevel::Medium => "Moderate similarity - some shared concepts or phrases",
            ConfidenceLevel::Low => "Low similarity - minimal content overlap",
            ConfidenceLevel::VeryLow => "Very low similarity - distinct content",
        }
    }

    /// The two indicators every verdict at this level starts with.
    pub fn baseline_indicators(&self) -> [&'static str; 2] {
        match self {
            ConfidenceLevel::VeryHigh => ["Potential copy-paste plagiarism", "Review immediately"],
            ConfidenceLevel::High => [
                "Possible paraphrasing or heavy adaptation",
                "Manual review recommended",
            ],
            ConfidenceLevel::Medium => [
                "May share common sources or ideas",
                "Consider context and field norms",
            ],
            ConfidenceLevel::Low => ["Likely original content", "Normal similarity for same topic"],
            ConfidenceLevel::VeryLow => ["Content appears original", "No plagiarism concerns"],
        }
    }
}

/// Build the confidence verdict for one document pair.
pub fn assess_confidence(
    cosine: f64,
    tfidf: f64,
    jaccard_char: f64,
    jaccard_word: f64,
) -> SimilarityConfidence {
    let score = composite_score(cosine, tfidf, jaccard_char, jaccard_word);
    let level = ConfidenceLevel::from_score(score);

    let mut indicators: Vec<String> = level
        .baseline_indicators()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let signals = [
        (cosine, INDICATOR_COSINE, "High word frequency similarity"),
        (jaccard_char, INDICATOR_JACCARD_CHAR, "Similar character patterns detected"),
        (jaccard_word, INDICATOR_JACCARD_WORD, "Similar phrase structures found"),
        (tfidf, INDICATOR_TFIDF, "Shared rare or distinctive terms"),
    ];
    for (value, threshold, indicator) in signals {
        if value > threshold {
            indicators.push(indicator.to_string());
        }
    }

    SimilarityConfidence {
        score,
        level,
        interpretation: level.interpretation().to_string(),
        indicators,
    }
}
