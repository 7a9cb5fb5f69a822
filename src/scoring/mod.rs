pub mod advice;
pub mod config;
pub mod dimension;
pub mod engine;
pub mod factors;
pub mod grade;
pub mod lexicon;
pub mod text;
pub mod validation;

pub use advice::generate_advice;
pub use config::*;
pub use dimension::Dimension;
pub use engine::{evaluate, evaluate_with, Report};
pub use grade::{classify_grade, Grade, LetterGrade};
pub use lexicon::{Lexicon, TermMatcher};
pub use validation::validate_lexicon;
