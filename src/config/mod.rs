mod schema;
mod validation;

pub use schema::RulesConfig;
pub use validation::validate_rules;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::RuleBook;

/// Get the config directory path (~/.config/wca-results/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("wca-results"))
}

/// Get the default rules file path (~/.config/wca-results/rules.yaml)
pub fn get_rules_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("rules.yaml"))
}

/// Parse and validate a rules file.
pub fn read_rules_config(path: &Path) -> Result<RulesConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file at {}", path.display()))?;

    let config: RulesConfig = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse rules: invalid YAML in {}", path.display()))?;

    if let Err(errors) = validate_rules(&config) {
        anyhow::bail!(
            "Invalid rules in {}:\n  - {}",
            path.display(),
            errors.join("\n  - ")
        );
    }

    Ok(config)
}

/// Overlay a rules file onto the built-in rule book.
pub fn build_rule_book(config: RulesConfig) -> RuleBook {
    let mut book = if config.replace_builtin {
        RuleBook::empty()
    } else {
        RuleBook::builtin()
    };
    for format in config.formats {
        book.insert_format(format);
    }
    for event in config.events {
        book.insert_event(event);
    }
    if let Some(table) = config.legacy_average_events {
        book.set_legacy_average_events(table);
    }
    book
}

/// Load the rule book.
///
/// # Arguments
///
/// * `path` - Optional path to a rules file. If None, uses the default path
///   (~/.config/wca-results/rules.yaml) when it exists and the built-in rules
///   otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given rules file does not exist
/// - The rules file cannot be read
/// - The YAML cannot be parsed or fails validation
pub fn load_rules(path: Option<PathBuf>) -> Result<RuleBook> {
    let rules_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Rules file not found at {}", p.display());
            }
            p
        }
        None => match get_rules_path().filter(|p| p.exists()) {
            Some(p) => p,
            None => {
                tracing::debug!("no rules file, using built-in rules");
                return Ok(RuleBook::builtin());
            }
        },
    };

    let config = read_rules_config(&rules_path)?;
    tracing::info!(
        path = %rules_path.display(),
        formats = config.formats.len(),
        events = config.events.len(),
        "loaded rules file"
    );
    Ok(build_rule_book(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{EventLookup, FormatKind, FormatLookup, RuleLookup};
    use std::io::Write;

    fn write_rules(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_overlays_builtin() {
        let file = write_rules(
            r#"
formats:
  - id: "5"
    kind: best_of
    expected_solve_count: 5
events:
  - id: "333mts"
    name: "3x3x3 Match the scramble"
legacy_average_events: ["333fm"]
"#,
        );
        let book = load_rules(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(book.lookup_format("5").unwrap().kind, FormatKind::BestOf);
        assert!(book.lookup_format("a").is_some());
        assert!(book.lookup_event("333mts").is_some());
        assert!(book.lookup_event("333").is_some());
        assert!(book.legacy_average_events().contains("333fm"));
        assert!(!book.legacy_average_events().contains("333bf"));
    }

    #[test]
    fn test_replace_builtin() {
        let file = write_rules(
            r#"
replace_builtin: true
formats:
  - { id: "m", kind: mean, expected_solve_count: 3 }
"#,
        );
        let book = load_rules(Some(file.path().to_path_buf())).unwrap();
        assert!(book.lookup_format("m").is_some());
        assert!(book.lookup_format("a").is_none());
        assert!(book.lookup_event("333").is_none());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rules(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Rules file not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let file = write_rules("formats: [ { id: 5");
        let err = load_rules(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse rules"));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let file = write_rules("rounds: []\n");
        assert!(load_rules(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_failed_validation_lists_errors() {
        let file = write_rules(
            r#"
formats:
  - { id: "x", kind: average, expected_solve_count: 9, trim_count: 1 }
"#,
        );
        let err = load_rules(Some(file.path().to_path_buf())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid rules"));
        assert!(message.contains("formats[0].expected_solve_count"));
    }

    #[test]
    fn test_build_rule_book_from_default_config() {
        assert_eq!(build_rule_book(RulesConfig::default()), RuleBook::builtin());
    }
}
