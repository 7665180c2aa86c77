//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub book: BookConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BookConfig {
    pub name: String,
    /// Written before every input line
    pub prompt: String,
    /// Lowercase every input line before parsing
    pub case_insensitive: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            name: "contact-book".to_string(),
            prompt: "...".to_string(),
            case_insensitive: true,
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        if let Err(e) = config.apply_env(|key| std::env::var(key).ok()) {
            tracing::warn!("Ignoring environment override: {}", e);
        }
        config
    }

    /// Apply `CONTACT_BOOK_*` overrides looked up through `var`
    pub fn apply_env<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prompt) = var("CONTACT_BOOK_PROMPT") {
            self.book.prompt = prompt;
        }

        if let Some(value) = var("CONTACT_BOOK_CASE_INSENSITIVE") {
            self.book.case_insensitive = parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidValue(format!("CONTACT_BOOK_CASE_INSENSITIVE={}", value))
            })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.book.prompt, "...");
        assert!(config.book.case_insensitive);
    }

    #[test]
    fn test_yaml_round_trip_uses_kebab_case() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("case-insensitive: true"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = Config::from_yaml("book:\n  prompt: \"> \"\n").unwrap();
        assert_eq!(config.book.prompt, "> ");
        assert!(config.book.case_insensitive);
        assert_eq!(config.book.name, "contact-book");
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(Config::from_yaml("book: [1, 2"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CONTACT_BOOK_PROMPT", ">> "),
            ("CONTACT_BOOK_CASE_INSENSITIVE", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.book.prompt, ">> ");
        assert!(!config.book.case_insensitive);
    }

    #[test]
    fn test_env_rejects_bad_bool() {
        let mut config = Config::default();
        let result = config.apply_env(|key| {
            (key == "CONTACT_BOOK_CASE_INSENSITIVE").then(|| "maybe".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
        assert!(config.book.case_insensitive);
    }
}
