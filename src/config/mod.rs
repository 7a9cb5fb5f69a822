mod init;
mod schema;

pub use init::{default_config_yaml, write_default_config};
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/writing-grader/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("writing-grader"))
}

/// Get the default config file path (~/.config/writing-grader/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/writing-grader/config.yaml) and falls back to built-in
///   defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            parse_config_file(&path)
        }
        None => {
            let path = get_config_path()?;
            if path.exists() {
                parse_config_file(&path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

/// Parse config YAML. Blank content is an empty config.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MatchMode;
    use std::env;

    #[test]
    fn test_parse_config_with_lexicon() {
        let yaml = r#"
lexicon:
  match_mode: substring
  connectors:
    - 그러나
    - 따라서
"#;
        let config = parse_config(yaml).unwrap();
        let lexicon = config.lexicon.unwrap();
        assert_eq!(lexicon.match_mode, Some(MatchMode::Substring));
        assert_eq!(lexicon.connectors.map(|c| c.len()), Some(2));
        assert!(lexicon.emotion.is_none());
    }

    #[test]
    fn test_korean_demo_lexicon_loads() {
        let config = parse_config(include_str!("../../demos/lexicon-ko.yaml")).unwrap();
        let lexicon_config = config.lexicon.unwrap();
        assert!(crate::scoring::validate_lexicon(&lexicon_config).is_ok());

        let lexicon = crate::scoring::Lexicon::from_config(&lexicon_config).unwrap();
        assert_eq!(lexicon.match_mode, MatchMode::Substring);
        assert_eq!(lexicon.connectors.terms().len(), 15);
        assert_eq!(lexicon.connectors.count("예를 들어, 그러나 또한"), 3);
    }

    #[test]
    fn test_parse_config_blank() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert_eq!(parse_config("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_config_unknown_key() {
        assert!(parse_config("weights: {}\n").is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let path = env::temp_dir().join("writing_grader_test_missing_config.yaml");
        let _ = fs::remove_file(&path);
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_path() {
        let path = env::temp_dir().join("writing_grader_test_load_config.yaml");
        fs::write(&path, "lexicon:\n  creative: [shiny]\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(
            config.lexicon.and_then(|l| l.creative),
            Some(vec!["shiny".to_string()])
        );

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_invalid_yaml_reports_path() {
        let path = env::temp_dir().join("writing_grader_test_invalid_config.yaml");
        fs::write(&path, "lexicon: [not, a, map]\n").unwrap();

        let err = load_config(Some(path.clone())).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid YAML"));

        fs::remove_file(&path).ok();
    }
}
