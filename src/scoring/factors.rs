//! The five sub-scorers. Each returns a value in `[0.0, 1.0]` and resolves
//! degenerate input to `0.0` instead of failing.

use std::collections::HashSet;

use super::lexicon::Lexicon;
use super::text::{count_char, sentences, whitespace_word_count, word_tokens};

const EXPRESSIVENESS_CAP: f64 = 20.0;
const LOGIC_RATIO_CAP: f64 = 0.5;
const CREATIVITY_CAP: f64 = 15.0;

/// Distinct word tokens over total word tokens.
pub fn vocabulary_diversity(text: &str) -> f64 {
    let tokens = word_tokens(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    unique.len() as f64 / tokens.len() as f64
}

/// Mean whitespace words per sentence, mapped through [`sentence_length_band`].
pub fn sentence_length(text: &str) -> f64 {
    let sentences = sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| whitespace_word_count(s)).sum();
    sentence_length_band(total as f64 / sentences.len() as f64)
}

/// 8-15 words is ideal, 5-20 acceptable, anything else gets the floor.
pub fn sentence_length_band(mean: f64) -> f64 {
    if (8.0..=15.0).contains(&mean) {
        1.0
    } else if (5.0..=20.0).contains(&mean) {
        0.7
    } else {
        0.4
    }
}

/// Emotion, figurative and intensifier hits per hundred whitespace words,
/// capped at 20.
pub fn expressiveness(text: &str, lexicon: &Lexicon) -> f64 {
    let words = whitespace_word_count(text);
    if words == 0 {
        return 0.0;
    }
    let per_hundred = lexicon.expressive_hits(text) as f64 / words as f64 * 100.0;
    per_hundred.min(EXPRESSIVENESS_CAP) / EXPRESSIVENESS_CAP
}

/// Connectors per sentence, saturating at one connector every two sentences.
pub fn logical_structure(text: &str, lexicon: &Lexicon) -> f64 {
    let sentence_count = sentences(text).len();
    if sentence_count == 0 {
        return 0.0;
    }
    let ratio = lexicon.connectors.count(text) as f64 / sentence_count as f64;
    ratio.min(LOGIC_RATIO_CAP) * 2.0
}

/// Creative adjectives (double weight) plus `?` and `!` per hundred
/// whitespace words, capped at 15.
pub fn creativity(text: &str, lexicon: &Lexicon) -> f64 {
    let words = whitespace_word_count(text);
    if words == 0 {
        return 0.0;
    }
    let creative = lexicon.creative.count(text);
    let questions = count_char(text, '?');
    let exclamations = count_char(text, '!');
    let raw = (creative * 2 + questions + exclamations) as f64 / words as f64 * 100.0;
    raw.min(CREATIVITY_CAP) / CREATIVITY_CAP
}
