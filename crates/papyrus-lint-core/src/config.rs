//! Configuration types for papyrus-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for papyrus-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use ("default" or "strict").
    #[serde(default)]
    pub preset: Option<String>,

    /// Linter configuration.
    #[serde(default)]
    pub linter: LinterConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Rules without an entry are enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rule_setting(rule_name).unwrap_or(true)
    }

    /// Returns the explicit `enabled` setting for a rule, if one was given.
    #[must_use]
    pub fn rule_setting(&self, rule_name: &str) -> Option<bool> {
        self.rules.get(rule_name).and_then(|c| c.enabled)
    }
}

/// Linter-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Glob patterns to exclude from script discovery.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.preset.is_none());
        assert!(config.linter.exclude.is_empty());
        assert!(config.is_rule_enabled("property"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "strict"

[linter]
exclude = ["**/backup/**"]

[rules.property]
enabled = false

[rules.event-block]
enabled = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.linter.exclude, vec!["**/backup/**".to_string()]);
        assert!(!config.is_rule_enabled("property"));
        assert_eq!(config.rule_setting("event-block"), Some(true));
        assert_eq!(config.rule_setting("script-name"), None);
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("preset = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
