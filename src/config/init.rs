use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::scoring::LexiconConfig;

const HEADER: &str = "\
# writing-grader configuration
#
# Every lexicon list is optional; a list you leave out uses the built-in one.
# match_mode: whole_word  -> case-insensitive, whole words and phrases only
# match_mode: substring   -> case-sensitive, matches inside words too
";

/// The built-in configuration rendered as YAML, with an explanatory header.
pub fn default_config_yaml() -> Result<String> {
    let config = Config {
        lexicon: Some(LexiconConfig::default()),
    };
    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
    Ok(format!("{}\n{}", HEADER, yaml))
}

/// Write the default config to `path` atomically.
///
/// Refuses to replace an existing file unless `force` is set. Creates parent
/// directories as needed.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Pass --force to overwrite.",
            path.display()
        );
    }

    let yaml = default_config_yaml()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_yaml_parses_back() {
        let yaml = default_config_yaml().unwrap();
        assert!(yaml.starts_with("# writing-grader configuration"));
        let config = parse_config(&yaml).unwrap();
        assert_eq!(config.lexicon, Some(LexiconConfig::default()));
    }

    #[test]
    fn test_write_default_config() {
        let dir = env::temp_dir().join("writing_grader_test_init");
        let path = dir.join("config.yaml");
        let _ = fs::remove_dir_all(&dir);

        write_default_config(&path, false).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("match_mode"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let path = env::temp_dir().join("writing_grader_test_init_existing.yaml");
        fs::write(&path, "lexicon: {}\n").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "lexicon: {}\n");

        write_default_config(&path, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("connectors"));

        fs::remove_file(&path).ok();
    }
}
