use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the passage to grade from `path`, or from stdin when `path` is None
/// or `-`.
pub fn read_passage(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => read_from(std::io::stdin().lock()),
    }
}

fn read_from(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read from stdin")?;
    Ok(text)
}

/// A passage with nothing but whitespace is not worth grading.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
