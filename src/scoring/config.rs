use serde::{Deserialize, Serialize};

const DEFAULT_EMOTION: &[&str] = &[
    "happy",
    "sad",
    "angry",
    "surprising",
    "moving",
    "interesting",
    "beautiful",
    "wonderful",
    "excellent",
    "amazing",
];

const DEFAULT_FIGURATIVE: &[&str] = &[
    "as if",
    "as though",
    "like",
    "similar to",
    "resembles",
    "reminiscent of",
];

const DEFAULT_INTENSIFIER: &[&str] = &[
    "really",
    "very",
    "extremely",
    "too",
    "tremendously",
    "incredibly",
    "especially",
    "exactly",
    "completely",
    "truly",
];

const DEFAULT_CONNECTORS: &[&str] = &[
    "however",
    "but",
    "therefore",
    "thus",
    "because",
    "for example",
    "firstly",
    "secondly",
    "thirdly",
    "finally",
    "in conclusion",
    "meanwhile",
    "also",
    "in addition",
    "on the other hand",
];

const DEFAULT_CREATIVE: &[&str] = &[
    "unique",
    "new",
    "fresh",
    "novel",
    "innovative",
    "creative",
    "original",
    "unusual",
    "special",
    "unparalleled",
];

/// How lexicon terms are found in the text.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive, term must be bounded by non-word characters.
    #[default]
    WholeWord,
    /// Case-sensitive, term counts anywhere (suits agglutinative languages).
    Substring,
}

/// Keyword lists used by the expressiveness, logic and creativity scorers.
///
/// Every field is optional; a missing list falls back to the built-in one.
///
/// Example YAML:
/// ```yaml
/// lexicon:
///   match_mode: whole_word
///   emotion: [happy, sad]
///   connectors: [however, therefore, "for example"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexiconConfig {
    #[serde(default)]
    pub match_mode: Option<MatchMode>,

    /// Emotion words (expressiveness)
    #[serde(default)]
    pub emotion: Option<Vec<String>>,

    /// Simile and metaphor markers (expressiveness)
    #[serde(default)]
    pub figurative: Option<Vec<String>>,

    /// Emphasis adverbs (expressiveness)
    #[serde(default)]
    pub intensifier: Option<Vec<String>>,

    /// Contrastive, causal, enumerative and concluding connectives (logic)
    #[serde(default)]
    pub connectors: Option<Vec<String>>,

    /// Creativity adjectives (creativity)
    #[serde(default)]
    pub creative: Option<Vec<String>>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            match_mode: Some(MatchMode::WholeWord),
            emotion: Some(owned(DEFAULT_EMOTION)),
            figurative: Some(owned(DEFAULT_FIGURATIVE)),
            intensifier: Some(owned(DEFAULT_INTENSIFIER)),
            connectors: Some(owned(DEFAULT_CONNECTORS)),
            creative: Some(owned(DEFAULT_CREATIVE)),
        }
    }
}

impl LexiconConfig {
    /// Fill every missing field from the built-in lexicon.
    pub fn resolved(&self) -> LexiconConfig {
        let defaults = LexiconConfig::default();
        LexiconConfig {
            match_mode: self.match_mode.or(defaults.match_mode),
            emotion: self.emotion.clone().or(defaults.emotion),
            figurative: self.figurative.clone().or(defaults.figurative),
            intensifier: self.intensifier.clone().or(defaults.intensifier),
            connectors: self.connectors.clone().or(defaults.connectors),
            creative: self.creative.clone().or(defaults.creative),
        }
    }

    /// Named term lists in a stable order, skipping absent ones.
    pub fn categories(&self) -> Vec<(&'static str, &[String])> {
        [
            ("emotion", &self.emotion),
            ("figurative", &self.figurative),
            ("intensifier", &self.intensifier),
            ("connectors", &self.connectors),
            ("creative", &self.creative),
        ]
        .into_iter()
        .filter_map(|(name, terms)| terms.as_deref().map(|t| (name, t)))
        .collect()
    }
}
