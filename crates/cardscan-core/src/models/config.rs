//! Configuration structures for card parsing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CardScanError, Result};

/// Main configuration for cardscan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardScanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of leading lines searched for the person's name.
    pub name_search_lines: usize,

    /// A line containing the name is treated as the name line (and skipped
    /// when looking for the company) unless it is longer than the name by
    /// more than this many characters.
    pub name_line_slack: usize,

    /// Cards scoring below this are reported for manual review.
    pub low_confidence_threshold: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_search_lines: 3,
            name_line_slack: 5,
            low_confidence_threshold: 0.5,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl CardScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the parser cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.name_search_lines == 0 {
            return Err(CardScanError::Config(
                "extraction.name_search_lines must be at least 1".to_string(),
            ));
        }
        let threshold = self.extraction.low_confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CardScanError::Config(format!(
                "extraction.low_confidence_threshold must be within 0.0 - 1.0, got {}",
                threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CardScanConfig =
            serde_json::from_str(r#"{"extraction": {"name_search_lines": 5}}"#).unwrap();
        assert_eq!(config.extraction.name_search_lines, 5);
        assert_eq!(config.extraction.name_line_slack, 5);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CardScanConfig::default();
        assert!(config.validate().is_ok());

        config.extraction.name_search_lines = 0;
        assert!(matches!(config.validate(), Err(CardScanError::Config(_))));

        config.extraction.name_search_lines = 3;
        config.extraction.low_confidence_threshold = 1.5;
        assert!(config.validate().is_err());
    }
}
