use super::dimension::Dimension;
use super::engine::Report;

pub const ALL_STRONG_ADVICE: &str = "Every dimension looks strong. Keep writing at this level!";

/// One tip per dimension that falls below its threshold, in dimension order,
/// or the single all-strong message when none does.
pub fn generate_advice(report: &Report) -> Vec<String> {
    let advice: Vec<String> = report
        .dimensions()
        .into_iter()
        .filter(|(dim, score)| *score < dim.advice_threshold())
        .map(|(dim, _)| dim.advice().to_string())
        .collect();

    if advice.is_empty() {
        vec![ALL_STRONG_ADVICE.to_string()]
    } else {
        advice
    }
}
