//! Color palette for terminal output

use owo_colors::AnsiColors;

use crate::scoring::{Dimension, LetterGrade};

/// Terminal colors for the text report
#[derive(Debug, Clone)]
pub struct Palette {
    // Bar colors, one per dimension
    pub vocabulary: AnsiColors,
    pub sentence_length: AnsiColors,
    pub expressiveness: AnsiColors,
    pub logic: AnsiColors,
    pub creativity: AnsiColors,

    // Grade colors (traffic light pattern)
    pub grade_high: AnsiColors,
    pub grade_mid: AnsiColors,
    pub grade_warn: AnsiColors,
    pub grade_low: AnsiColors,

    pub bar_empty: AnsiColors,
    pub muted: AnsiColors,
    pub title: AnsiColors,
}

impl Palette {
    /// Bright variants for dark backgrounds
    pub fn dark() -> Self {
        Self {
            vocabulary: AnsiColors::BrightBlue,
            sentence_length: AnsiColors::BrightGreen,
            expressiveness: AnsiColors::BrightYellow,
            logic: AnsiColors::BrightRed,
            creativity: AnsiColors::BrightMagenta,
            grade_high: AnsiColors::BrightGreen,
            grade_mid: AnsiColors::BrightBlue,
            grade_warn: AnsiColors::BrightYellow,
            grade_low: AnsiColors::BrightRed,
            bar_empty: AnsiColors::BrightBlack,
            muted: AnsiColors::White,
            title: AnsiColors::BrightCyan,
        }
    }

    /// Plain variants, readable on light backgrounds
    pub fn light() -> Self {
        Self {
            vocabulary: AnsiColors::Blue,
            sentence_length: AnsiColors::Green,
            expressiveness: AnsiColors::Yellow,
            logic: AnsiColors::Red,
            creativity: AnsiColors::Magenta,
            grade_high: AnsiColors::Green,
            grade_mid: AnsiColors::Blue,
            grade_warn: AnsiColors::Yellow,
            grade_low: AnsiColors::Red,
            bar_empty: AnsiColors::White,
            muted: AnsiColors::BrightBlack,
            title: AnsiColors::Cyan,
        }
    }

    /// Pick a palette from the terminal background luminance, falling back
    /// to the dark palette when the terminal doesn't answer.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dimension_color(&self, dimension: Dimension) -> AnsiColors {
        match dimension {
            Dimension::VocabularyDiversity => self.vocabulary,
            Dimension::SentenceLength => self.sentence_length,
            Dimension::Expressiveness => self.expressiveness,
            Dimension::LogicalStructure => self.logic,
            Dimension::Creativity => self.creativity,
        }
    }

    pub fn grade_color(&self, grade: LetterGrade) -> AnsiColors {
        match grade {
            LetterGrade::APlus | LetterGrade::A => self.grade_high,
            LetterGrade::BPlus | LetterGrade::B => self.grade_mid,
            LetterGrade::C => self.grade_warn,
            LetterGrade::D => self.grade_low,
        }
    }
}
