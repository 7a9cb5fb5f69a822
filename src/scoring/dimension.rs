use serde::Serialize;

/// One of the five scored aspects of a passage, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    VocabularyDiversity,
    SentenceLength,
    Expressiveness,
    LogicalStructure,
    Creativity,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::VocabularyDiversity,
        Dimension::SentenceLength,
        Dimension::Expressiveness,
        Dimension::LogicalStructure,
        Dimension::Creativity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::VocabularyDiversity => "Vocabulary",
            Dimension::SentenceLength => "Sentence length",
            Dimension::Expressiveness => "Expressiveness",
            Dimension::LogicalStructure => "Logic",
            Dimension::Creativity => "Creativity",
        }
    }

    /// Points this dimension contributes to the composite at a sub-score of 1.0.
    /// The five weights sum to 100.
    pub fn weight(self) -> f64 {
        match self {
            Dimension::VocabularyDiversity => 20.0,
            Dimension::SentenceLength => 25.0,
            Dimension::Expressiveness => 20.0,
            Dimension::LogicalStructure => 20.0,
            Dimension::Creativity => 15.0,
        }
    }

    /// Sub-scores strictly below this trigger [`Dimension::advice`].
    pub fn advice_threshold(self) -> f64 {
        match self {
            Dimension::VocabularyDiversity => 0.5,
            Dimension::SentenceLength => 0.6,
            Dimension::Expressiveness => 0.4,
            Dimension::LogicalStructure => 0.4,
            Dimension::Creativity => 0.3,
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Dimension::VocabularyDiversity => {
                "Avoid repeating the same words; reach for a wider vocabulary."
            }
            Dimension::SentenceLength => {
                "Your sentences are too short or too long. Around 8-15 words each reads best."
            }
            Dimension::Expressiveness => "Describe feelings and impressions more vividly.",
            Dimension::LogicalStructure => {
                "Link your ideas with connectors such as 'however', 'therefore' or 'for example'."
            }
            Dimension::Creativity => {
                "Make the piece more engaging with original expressions or questions to the reader."
            }
        }
    }
}
