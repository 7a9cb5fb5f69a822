use super::config::LexiconConfig;

/// Validate a lexicon configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_lexicon(config: &LexiconConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (category, terms) in config.categories() {
        for (i, term) in terms.iter().enumerate() {
            if term.trim().is_empty() {
                errors.push(format!("lexicon.{}[{}]: term must not be blank", category, i));
            } else if term.trim() != term {
                errors.push(format!(
                    "lexicon.{}[{}]: invalid '{}' - leading or trailing whitespace",
                    category, i, term
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
