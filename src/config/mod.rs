//! Page and behaviour configuration
//!
//! Loaded from JSON on the JS side and from TOML on the command line. Every
//! field has a default, so an empty document is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdderError, Result};
use crate::history::DEFAULT_MAX_DEPTH;
use crate::input::Coercion;
use crate::math::Operation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdderConfig {
    pub elements: ElementIds,
    pub coercion: Coercion,
    pub operation: Operation,
    pub history_depth: usize,
}

/// DOM ids of the page elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub num1: String,
    pub num2: String,
    pub trigger: String,
    pub answer: String,
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            coercion: Coercion::default(),
            operation: Operation::default(),
            history_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            num1: "num1".to_string(),
            num2: "num2".to_string(),
            trigger: "add".to_string(),
            answer: "answer".to_string(),
        }
    }
}

impl AdderConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Element ids must be non-empty and distinct
    pub fn validate(&self) -> Result<()> {
        let ids = [
            ("num1", &self.elements.num1),
            ("num2", &self.elements.num2),
            ("trigger", &self.elements.trigger),
            ("answer", &self.elements.answer),
        ];

        for (i, (name, id)) in ids.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(AdderError::Config {
                    message: format!("elements.{name} must not be empty"),
                });
            }
            if let Some((other, _)) = ids[..i].iter().find(|(_, prev)| prev == id) {
                return Err(AdderError::Config {
                    message: format!("elements.{name} duplicates elements.{other} ({id})"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AdderConfig::default();
        assert_eq!(config.elements.num1, "num1");
        assert_eq!(config.elements.num2, "num2");
        assert_eq!(config.elements.trigger, "add");
        assert_eq!(config.elements.answer, "answer");
        assert_eq!(config.coercion, Coercion::NumberInput);
        assert_eq!(config.operation, Operation::Add);
        assert_eq!(config.history_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_empty_documents() {
        assert_eq!(AdderConfig::from_json_str("{}").unwrap(), AdderConfig::default());
        assert_eq!(AdderConfig::from_toml_str("").unwrap(), AdderConfig::default());
    }

    #[test]
    fn test_json_partial() {
        let config = AdderConfig::from_json_str(
            r#"{"coercion": "number-literal", "elements": {"answer": "result"}}"#,
        )
        .unwrap();
        assert_eq!(config.coercion, Coercion::NumberLiteral);
        assert_eq!(config.elements.answer, "result");
        assert_eq!(config.elements.num1, "num1");
    }

    #[test]
    fn test_toml() {
        let config = AdderConfig::from_toml_str(
            r#"
            history_depth = 5
            coercion = "number-input"
            operation = "subtract"

            [elements]
            trigger = "go"
            "#,
        )
        .unwrap();
        assert_eq!(config.history_depth, 5);
        assert_eq!(config.operation, Operation::Subtract);
        assert_eq!(config.elements.trigger, "go");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = AdderConfig::from_json_str(r#"{"elements": {"num2": "num1"}}"#);
        assert!(matches!(result, Err(AdderError::Config { .. })));
    }

    #[test]
    fn test_rejects_empty_id() {
        let result = AdderConfig::from_toml_str("[elements]\nanswer = \"\"");
        assert!(matches!(result, Err(AdderError::Config { .. })));
    }

    #[test]
    fn test_rejects_unknown_coercion() {
        let result = AdderConfig::from_json_str(r#"{"coercion": "loose"}"#);
        assert!(matches!(result, Err(AdderError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_depth = 7").unwrap();
        let config = AdderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.history_depth, 7);

        let missing = AdderConfig::from_file("/nonexistent/adder.toml");
        assert!(matches!(missing, Err(AdderError::Io(_))));
    }
}
