use serde::Serialize;

use super::dimension::Dimension;
use super::factors;
use super::lexicon::Lexicon;
use super::text::{sentences, whitespace_word_count};

/// Result of one evaluation. Built once by [`evaluate_with`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub vocab_diversity: f64,
    pub sentence_length: f64,
    pub expressiveness: f64,
    pub logical_structure: f64,
    pub creativity: f64,
    pub composite_score: f64,
    pub total_words: usize,
    pub total_sentences: usize,
    pub average_sentence_length: f64,
}

impl Report {
    pub fn score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::VocabularyDiversity => self.vocab_diversity,
            Dimension::SentenceLength => self.sentence_length,
            Dimension::Expressiveness => self.expressiveness,
            Dimension::LogicalStructure => self.logical_structure,
            Dimension::Creativity => self.creativity,
        }
    }

    /// Sub-scores paired with their dimension, in report order.
    pub fn dimensions(&self) -> [(Dimension, f64); 5] {
        Dimension::ALL.map(|d| (d, self.score(d)))
    }
}

/// Score `text` with the built-in lexicon.
pub fn evaluate(text: &str) -> Report {
    evaluate_with(text, Lexicon::builtin())
}

/// Score `text` with a caller-supplied lexicon. Never fails; degenerate input
/// yields zero sub-scores.
pub fn evaluate_with(text: &str, lexicon: &Lexicon) -> Report {
    let vocab_diversity = factors::vocabulary_diversity(text);
    let sentence_length = factors::sentence_length(text);
    let expressiveness = factors::expressiveness(text, lexicon);
    let logical_structure = factors::logical_structure(text, lexicon);
    let creativity = factors::creativity(text, lexicon);

    let composite_score = vocab_diversity * Dimension::VocabularyDiversity.weight()
        + sentence_length * Dimension::SentenceLength.weight()
        + expressiveness * Dimension::Expressiveness.weight()
        + logical_structure * Dimension::LogicalStructure.weight()
        + creativity * Dimension::Creativity.weight();

    let total_words = whitespace_word_count(text);
    let total_sentences = sentences(text).len();
    let average_sentence_length = if total_sentences > 0 {
        total_words as f64 / total_sentences as f64
    } else {
        0.0
    };

    Report {
        vocab_diversity,
        sentence_length,
        expressiveness,
        logical_structure,
        creativity,
        composite_score,
        total_words,
        total_sentences,
        average_sentence_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{LexiconConfig, MatchMode};

    const SAMPLE: &str = "The early morning was really beautiful, like a painting. \
However, the wind grew cold and the sky turned gray. \
Why do storms always arrive at the very worst moment? \
Therefore we stayed inside and told unique stories by the fire!";

    fn assert_in_unit_range(report: &Report) {
        for (dim, score) in report.dimensions() {
            assert!((0.0..=1.0).contains(&score), "{:?} out of range: {}", dim, score);
        }
        assert!((0.0..=100.0).contains(&report.composite_score));
    }

    #[test]
    fn test_empty_input() {
        let report = evaluate("");
        assert_eq!(report.vocab_diversity, 0.0);
        assert_eq!(report.sentence_length, 0.0);
        assert_eq!(report.expressiveness, 0.0);
        assert_eq!(report.logical_structure, 0.0);
        assert_eq!(report.creativity, 0.0);
        assert_eq!(report.composite_score, 0.0);
        assert_eq!(report.total_words, 1);
        assert_eq!(report.total_sentences, 0);
        assert_eq!(report.average_sentence_length, 0.0);
    }

    #[test]
    fn test_whitespace_only_input_keeps_split_count() {
        let report = evaluate("   \n  ");
        assert_eq!(report.composite_score, 0.0);
        assert_eq!(report.total_words, 2);
        assert_eq!(report.total_sentences, 0);
    }

    #[test]
    fn test_sample_passage() {
        let report = evaluate(SAMPLE);
        assert_eq!(report.total_sentences, 4);
        assert_eq!(report.total_words, 40);
        assert_eq!(report.average_sentence_length, 10.0);
        assert_eq!(report.sentence_length, 1.0);
        // "However", "Therefore" over 4 sentences
        assert_eq!(report.logical_structure, 1.0);
        assert_in_unit_range(&report);
    }

    #[test]
    fn test_composite_is_weighted_sum() {
        let report = evaluate(SAMPLE);
        let expected: f64 = report
            .dimensions()
            .iter()
            .map(|(dim, score)| score * dim.weight())
            .sum();
        assert!((report.composite_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_scores_reach_hundred() {
        // Short ideal-length sentences dense with every keyword category.
        let text = "Really happy unique new ideas feel fresh and very novel, however! \
Therefore truly beautiful original thoughts shine like stars, because why not?";
        let report = evaluate(text);
        assert_in_unit_range(&report);
        assert_eq!(report.composite_score, 100.0);
    }

    #[test]
    fn test_ranges_hold_for_odd_inputs() {
        let inputs = [
            "",
            " ",
            "!!!???...",
            "a",
            "happy happy happy happy",
            "However. However. However. However.",
            "???!!!? unique unique",
            "정말 아름답다. 그러나 슬프다!",
            "word\tword\nword\r\nword",
        ];
        for input in inputs {
            assert_in_unit_range(&evaluate(input));
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(evaluate(SAMPLE), evaluate(SAMPLE));
        let first = evaluate(SAMPLE);
        let second = evaluate(SAMPLE);
        assert_eq!(first.composite_score.to_bits(), second.composite_score.to_bits());
    }

    #[test]
    fn test_custom_lexicon_changes_keyword_scores_only() {
        let config = LexiconConfig {
            match_mode: Some(MatchMode::Substring),
            emotion: Some(vec!["기쁘다".to_string()]),
            figurative: Some(vec!["처럼".to_string()]),
            intensifier: Some(vec!["정말".to_string()]),
            connectors: Some(vec!["그러나".to_string()]),
            creative: Some(vec!["독특한".to_string()]),
        };
        let lexicon = Lexicon::from_config(&config).unwrap();
        let text = "나는 정말 기쁘다. 그러나 꽃처럼 독특한 날이다.";

        let custom = evaluate_with(text, &lexicon);
        let builtin = evaluate(text);

        assert!(custom.expressiveness > 0.0);
        assert_eq!(custom.logical_structure, 1.0);
        assert!(custom.creativity > 0.0);
        assert_eq!(builtin.expressiveness, 0.0);
        assert_eq!(builtin.logical_structure, 0.0);
        assert_eq!(custom.vocab_diversity, builtin.vocab_diversity);
        assert_eq!(custom.sentence_length, builtin.sentence_length);
        assert_eq!(custom.total_words, builtin.total_words);
    }

    #[test]
    fn test_dimensions_in_report_order() {
        let report = evaluate(SAMPLE);
        let dims: Vec<Dimension> = report.dimensions().iter().map(|(d, _)| *d).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
        assert_eq!(report.dimensions()[1].1, report.sentence_length);
    }
}
