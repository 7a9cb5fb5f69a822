use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use super::config::{LexiconConfig, MatchMode};

static DEFAULT_LEXICON: OnceLock<Lexicon> = OnceLock::new();

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escape `term` and put a `\b` on each side that starts or ends with a word
/// character. A boundary next to punctuation (as in `C++`) could never match.
fn bounded(term: &str) -> String {
    let leading = term.chars().next().is_some_and(is_word_char);
    let trailing = term.chars().last().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if leading { r"\b" } else { "" },
        regex::escape(term),
        if trailing { r"\b" } else { "" }
    )
}

/// A compiled term list. Counts non-overlapping, leftmost-first matches.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<String>,
    pattern: Option<Regex>,
}

impl TermMatcher {
    pub fn compile(terms: &[String], mode: MatchMode) -> Result<Self> {
        if terms.is_empty() {
            return Ok(Self {
                terms: Vec::new(),
                pattern: None,
            });
        }

        let alternation = terms
            .iter()
            .map(|t| match mode {
                MatchMode::WholeWord => bounded(t),
                MatchMode::Substring => regex::escape(t),
            })
            .collect::<Vec<_>>()
            .join("|");

        let pattern = match mode {
            MatchMode::WholeWord => RegexBuilder::new(&format!("(?:{})", alternation))
                .case_insensitive(true)
                .build(),
            MatchMode::Substring => Regex::new(&format!("(?:{})", alternation)),
        }
        .context("Failed to compile lexicon terms")?;

        Ok(Self {
            terms: terms.to_vec(),
            pattern: Some(pattern),
        })
    }

    pub fn count(&self, text: &str) -> usize {
        self.pattern
            .as_ref()
            .map_or(0, |re| re.find_iter(text).count())
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Keyword matchers for every lexicon-driven scorer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub match_mode: MatchMode,
    pub emotion: TermMatcher,
    pub figurative: TermMatcher,
    pub intensifier: TermMatcher,
    pub connectors: TermMatcher,
    pub creative: TermMatcher,
}

impl Lexicon {
    /// Compile a lexicon, filling absent lists from the built-in defaults.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let resolved = config.resolved();
        let mode = resolved.match_mode.unwrap_or_default();
        let compile = |name: &str, terms: &Option<Vec<String>>| {
            TermMatcher::compile(terms.as_deref().unwrap_or_default(), mode)
                .with_context(|| format!("lexicon.{}", name))
        };

        Ok(Self {
            match_mode: mode,
            emotion: compile("emotion", &resolved.emotion)?,
            figurative: compile("figurative", &resolved.figurative)?,
            intensifier: compile("intensifier", &resolved.intensifier)?,
            connectors: compile("connectors", &resolved.connectors)?,
            creative: compile("creative", &resolved.creative)?,
        })
    }

    /// The built-in lexicon, compiled once per process.
    pub fn builtin() -> &'static Lexicon {
        DEFAULT_LEXICON.get_or_init(|| {
            Lexicon::from_config(&LexiconConfig::default())
                .expect("built-in lexicon compiles")
        })
    }

    /// Emotion, figurative and intensifier hits combined.
    pub fn expressive_hits(&self, text: &str) -> usize {
        self.emotion.count(text) + self.figurative.count(text) + self.intensifier.count(text)
    }

    /// Back to a fully populated config, e.g. for printing as YAML.
    pub fn to_config(&self) -> LexiconConfig {
        LexiconConfig {
            match_mode: Some(self.match_mode),
            emotion: Some(self.emotion.terms().to_vec()),
            figurative: Some(self.figurative.terms().to_vec()),
            intensifier: Some(self.intensifier.terms().to_vec()),
            connectors: Some(self.connectors.terms().to_vec()),
            creative: Some(self.creative.terms().to_vec()),
        }
    }
}
