use proptest::prelude::*;
use simtext::confidence::{assess_confidence, composite_score};
use simtext::frequency::term_frequency;
use simtext::models::ConfidenceLevel;
use simtext::sentence::{align_sentences, MATCH_THRESHOLD};
use simtext::shingle::{character_shingles, jaccard_similarity, word_shingles};
use simtext::similarity::{
    compute_idf, cosine_similarity, levenshtein_distance, levenshtein_similarity,
    tfidf_cosine_similarity,
};
use simtext::tokenize::tokenize;

// Short prose: a handful of words with occasional punctuation
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        ("[a-zA-Z]{1,6}", prop_oneof![Just(""), Just(","), Just("."), Just("!")]),
        0..40,
    )
    .prop_map(|words| {
        words
            .into_iter()
            .map(|(word, punct)| format!("{word}{punct}"))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn score() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

proptest! {
    #[test]
    fn tokens_are_lowercase_and_non_empty(text in prose()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn term_frequencies_sum_to_one(text in prose()) {
        let tokens = tokenize(&text);
        let tf = term_frequency(&tokens);
        if tokens.is_empty() {
            prop_assert!(tf.is_empty());
        } else {
            let total: f64 = tf.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-9, "sum was {}", total);
        }
    }

    #[test]
    fn cosine_is_symmetric_and_bounded(a in prose(), b in prose()) {
        let tf_a = term_frequency(&tokenize(&a));
        let tf_b = term_frequency(&tokenize(&b));
        let ab = cosine_similarity(&tf_a, &tf_b);
        let ba = cosine_similarity(&tf_b, &tf_a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn cosine_of_document_with_itself_is_exactly_one(text in prose()) {
        let tf = term_frequency(&tokenize(&text));
        prop_assume!(!tf.is_empty());
        prop_assert_eq!(cosine_similarity(&tf, &tf), 1.0);
    }

    #[test]
    fn cosine_self_similarity_with_repeated_tokens(
        words in prop::collection::vec("[a-e]{1,2}", 1..60)
    ) {
        let tf = term_frequency(&words);
        prop_assert_eq!(cosine_similarity(&tf, &tf), 1.0);
    }

    #[test]
    fn tfidf_is_symmetric_and_bounded(a in prose(), b in prose()) {
        let tf_a = term_frequency(&tokenize(&a));
        let tf_b = term_frequency(&tokenize(&b));
        let idf = compute_idf([&tf_a, &tf_b]);
        let ab = tfidf_cosine_similarity(&tf_a, &tf_b, &idf);
        let ba = tfidf_cosine_similarity(&tf_b, &tf_a, &idf);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn idf_covers_exactly_the_compared_tokens(a in prose(), b in prose()) {
        let tf_a = term_frequency(&tokenize(&a));
        let tf_b = term_frequency(&tokenize(&b));
        let idf = compute_idf([&tf_a, &tf_b]);

        for term in tf_a.keys().chain(tf_b.keys()) {
            let weight = idf.get(term).copied();
            let expected = if tf_a.contains_key(term) && tf_b.contains_key(term) {
                0.0
            } else {
                2f64.ln()
            };
            prop_assert_eq!(weight, Some(expected), "token {}", term);
        }
        for term in idf.keys() {
            prop_assert!(tf_a.contains_key(term) || tf_b.contains_key(term));
        }
    }

    #[test]
    fn jaccard_is_symmetric_and_bounded(a in prose(), b in prose(), w in 1usize..6) {
        let chars_a = character_shingles(&a, w);
        let chars_b = character_shingles(&b, w);
        let ab = jaccard_similarity(&chars_a, &chars_b);
        prop_assert_eq!(ab, jaccard_similarity(&chars_b, &chars_a));
        prop_assert!((0.0..=1.0).contains(&ab));

        let words_a = word_shingles(&tokenize(&a), w);
        let words_b = word_shingles(&tokenize(&b), w);
        let ab = jaccard_similarity(&words_a, &words_b);
        prop_assert_eq!(ab, jaccard_similarity(&words_b, &words_a));
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn shingles_of_same_text_are_identical(text in prose(), w in 1usize..6) {
        let shingles = character_shingles(&text, w);
        prop_assert_eq!(jaccard_similarity(&shingles, &shingles), 1.0);
    }

    #[test]
    fn levenshtein_is_symmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        let similarity = levenshtein_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&similarity));
    }

    #[test]
    fn composite_stays_in_unit_range(c in score(), t in score(), jc in score(), jw in score()) {
        let composite = composite_score(c, t, jc, jw);
        prop_assert!((0.0..=1.0).contains(&composite));

        let verdict = assess_confidence(c, t, jc, jw);
        prop_assert_eq!(verdict.level, ConfidenceLevel::from_score(verdict.score));
        prop_assert!(verdict.indicators.len() >= 2 && verdict.indicators.len() <= 6);
    }

    #[test]
    fn higher_composite_never_lowers_level(x in score(), y in score()) {
        let (low, high) = if x <= y { (x, y) } else { (y, x) };
        prop_assert!(ConfidenceLevel::from_score(low) <= ConfidenceLevel::from_score(high));
    }

    #[test]
    fn sentence_matches_are_sorted_and_strong(a in prose(), b in prose()) {
        let matches = align_sentences(&a, &b);
        for m in &matches {
            prop_assert!(m.score > MATCH_THRESHOLD);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
