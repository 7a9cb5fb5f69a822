pub mod config;
pub mod input;
pub mod output;
pub mod scoring;

pub use scoring::{classify_grade, evaluate, evaluate_with, generate_advice, Grade, Lexicon, Report};
