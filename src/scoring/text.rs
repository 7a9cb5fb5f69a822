//! Segmentation helpers shared by every sub-scorer.
//!
//! Two different word counts live here on purpose. [`word_tokens`] finds runs
//! of word characters and is only used for vocabulary diversity, while
//! [`whitespace_word_count`] counts the pieces left after splitting on
//! whitespace runs and feeds every ratio denominator and the reported total.
//! The whitespace count includes empty leading/trailing pieces, so `""`
//! counts as one word and `"  a "` as three.
//!
//! Word characters are ASCII only (`[0-9A-Za-z_]`): accented letters split a
//! token and non-Latin scripts produce no tokens at all.

use regex::Regex;
use std::sync::OnceLock;

static WORD_TOKEN: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();

fn word_token_re() -> &'static Regex {
    WORD_TOKEN.get_or_init(|| Regex::new(r"(?-u:\w)+").expect("word token pattern is valid"))
}

fn whitespace_run_re() -> &'static Regex {
    WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn sentence_break_re() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"))
}

/// Case-folded runs of word characters, in order of appearance.
pub fn word_tokens(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    word_token_re()
        .find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of pieces produced by splitting `text` on whitespace runs.
///
/// Never zero: a string with no whitespace is one piece, and each whitespace
/// run adds one more piece even when it sits at the start or end.
pub fn whitespace_word_count(text: &str) -> usize {
    whitespace_run_re().find_iter(text).count() + 1
}

/// Segments between runs of `.`, `!` and `?`, trimmed, empty ones dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    sentence_break_re()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Literal occurrences of a single character.
pub fn count_char(text: &str, needle: char) -> usize {
    text.chars().filter(|&c| c == needle).count()
}
