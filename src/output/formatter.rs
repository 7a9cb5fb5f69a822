use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use super::theme::Palette;
use crate::scoring::{Dimension, Grade, Report};

const LABEL_WIDTH: usize = 16;
const PERCENT_WIDTH: usize = 5;
const DEFAULT_BAR_WIDTH: usize = 30;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that fits the current terminal next to the label and percentage.
pub fn bar_width_for_terminal() -> usize {
    match get_terminal_width() {
        Some(width) => width
            .saturating_sub(LABEL_WIDTH + PERCENT_WIDTH + 2)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// A `[0, 1]` sub-score as a whole percentage ("62%")
pub fn format_percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// Filled and empty cells for a `[0, 1]` fraction, `width` cells in total.
fn bar_cells(fraction: f64, width: usize) -> (usize, usize) {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    (filled, width - filled)
}

/// Plain-text bar ("████░░░░")
pub fn format_bar(fraction: f64, width: usize) -> String {
    let (filled, empty) = bar_cells(fraction, width);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn format_dimension_line(
    dimension: Dimension,
    score: f64,
    palette: Option<&Palette>,
    bar_width: usize,
) -> String {
    let label = format!("{:<width$}", dimension.label(), width = LABEL_WIDTH);
    let percent = format!("{:>width$}", format_percent(score), width = PERCENT_WIDTH);

    match palette {
        Some(palette) => {
            let (filled, empty) = bar_cells(score, bar_width);
            format!(
                "{}{}{} {}",
                label,
                "█".repeat(filled).color(palette.dimension_color(dimension)),
                "░".repeat(empty).color(palette.bar_empty),
                percent.bold()
            )
        }
        None => format!("{}{} {}", label, format_bar(score, bar_width), percent),
    }
}

/// Full human-readable report: grade header, bar chart, statistics, advice.
///
/// `palette` of None disables colors.
pub fn format_report(
    report: &Report,
    grade: &Grade,
    advice: &[String],
    palette: Option<&Palette>,
    bar_width: usize,
) -> String {
    let mut lines = Vec::new();

    let score = format!("{:.1} / 100", report.composite_score);
    let header = match palette {
        Some(palette) => format!(
            "Grade: {} ({})  {}",
            grade.grade.as_str().color(palette.grade_color(grade.grade)).bold(),
            grade.label,
            score.color(palette.title)
        ),
        None => format!("Grade: {} ({})  {}", grade.grade, grade.label, score),
    };
    lines.push(header);
    lines.push(String::new());

    for (dimension, score) in report.dimensions() {
        lines.push(format_dimension_line(dimension, score, palette, bar_width));
    }
    lines.push(String::new());

    let stats = format!(
        "Words: {}  Sentences: {}  Avg sentence length: {:.1}",
        report.total_words, report.total_sentences, report.average_sentence_length
    );
    lines.push(match palette {
        Some(palette) => stats.color(palette.muted).to_string(),
        None => stats,
    });
    lines.push(String::new());

    lines.push(match palette {
        Some(_) => "Advice:".bold().to_string(),
        None => "Advice:".to_string(),
    });
    for (idx, tip) in advice.iter().enumerate() {
        lines.push(format!("{:>3}. {}", idx + 1, tip));
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a Report,
    grade: &'a Grade,
    advice: &'a [String],
}

/// Pretty-printed JSON with the report, grade and advice
pub fn format_json(report: &Report, grade: &Grade, advice: &[String]) -> Result<String> {
    serde_json::to_string_pretty(&JsonOutput {
        report,
        grade,
        advice,
    })
    .context("Failed to serialize report")
}

/// One tab-separated line for scripting (no headers, no colors).
/// Columns: composite, grade, five sub-scores as percentages, words, sentences
pub fn format_tsv(report: &Report, grade: &Grade) -> String {
    let mut columns = vec![
        format!("{:.1}", report.composite_score),
        grade.grade.to_string(),
    ];
    columns.extend(
        report
            .dimensions()
            .iter()
            .map(|(_, score)| format!("{:.0}", score * 100.0)),
    );
    columns.push(report.total_words.to_string());
    columns.push(report.total_sentences.to_string());
    columns.join("\t")
}
