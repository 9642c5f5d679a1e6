//! Configuration types and management for startup-namer.
//!
//! A [`NamerConfig`] is plain data: every section deserializes with defaults
//! for missing fields, so a YAML file only needs the settings it overrides.
//! Validation is explicit via [`NamerConfig::validate`].

pub mod filter;
pub mod scoring;
pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{NamerError, Result, ResultExt};
use crate::generators::Technique;

pub use filter::{FilterConfig, FilterThresholds};
pub use scoring::{ScoreWeights, ScoringConfig};
pub use validation::{
    validate_bounded_usize, validate_non_negative, validate_positive_usize, validate_score_range,
    validate_weights_sum,
};

/// Main configuration for the naming engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NamerConfig {
    /// Candidate generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Score weighting
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Quality filter thresholds
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output shaping
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration construction and I/O methods for [`NamerConfig`].
impl NamerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.generation.validate()?;
        self.scoring.validate()?;
        self.filter.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Candidate generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Keyword substituted when a request carries no usable keyword
    #[serde(default = "GenerationConfig::default_keyword")]
    pub default_keyword: String,

    /// Style assumed when a request does not name one
    #[serde(default = "GenerationConfig::default_style")]
    pub default_style: String,

    /// Techniques run for requests that do not pick their own, in run order
    #[serde(default = "Technique::all")]
    pub techniques: Vec<Technique>,

    /// Shortest blend kept by the portmanteau technique
    #[serde(default = "GenerationConfig::default_min_blend_length")]
    pub min_blend_length: usize,

    /// Longest blend kept by the portmanteau technique
    #[serde(default = "GenerationConfig::default_max_blend_length")]
    pub max_blend_length: usize,

    /// Maximum concept words taken from a request description
    #[serde(default = "GenerationConfig::default_max_context_words")]
    pub max_context_words: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_keyword: Self::default_keyword(),
            default_style: Self::default_style(),
            techniques: Technique::all(),
            min_blend_length: Self::default_min_blend_length(),
            max_blend_length: Self::default_max_blend_length(),
            max_context_words: Self::default_max_context_words(),
        }
    }
}

impl GenerationConfig {
    fn default_keyword() -> String {
        "startup".to_string()
    }

    fn default_style() -> String {
        "modern".to_string()
    }

    const fn default_min_blend_length() -> usize {
        4
    }

    const fn default_max_blend_length() -> usize {
        15
    }

    const fn default_max_context_words() -> usize {
        5
    }

    /// Validate generation configuration
    pub fn validate(&self) -> Result<()> {
        if !self.default_keyword.chars().any(char::is_alphanumeric) {
            return Err(NamerError::config_field(
                "default_keyword must contain at least one alphanumeric character",
                "generation.default_keyword",
            ));
        }

        if self.techniques.is_empty() {
            return Err(NamerError::config_field(
                "at least one technique must be enabled",
                "generation.techniques",
            ));
        }

        validate_bounded_usize(self.min_blend_length, 1, 20, "generation.min_blend_length")?;
        validate_bounded_usize(
            self.max_blend_length,
            self.min_blend_length,
            20,
            "generation.max_blend_length",
        )?;
        validate_bounded_usize(self.max_context_words, 0, 20, "generation.max_context_words")?;

        Ok(())
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Maximum number of ranked names returned per request
    #[serde(default = "OutputConfig::default_max_results")]
    pub max_results: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_results: Self::default_max_results(),
        }
    }
}

impl OutputConfig {
    const fn default_max_results() -> usize {
        50
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<()> {
        validate_bounded_usize(self.max_results, 1, 500, "output.max_results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = NamerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.max_results, 50);
        assert_eq!(config.generation.default_keyword, "startup");
        assert_eq!(config.generation.techniques.len(), 8);
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: NamerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.filter.thresholds, FilterThresholds::standard());
        assert_eq!(config.generation.max_blend_length, 15);
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("namer.yml");

        let mut config = NamerConfig::default();
        config.output.max_results = 12;
        config.generation.techniques = vec![Technique::Portmanteau, Technique::Invented];
        config.to_yaml_file(&path).unwrap();

        let loaded = NamerConfig::from_yaml_file(&path).unwrap();
        assert_eq!(loaded.output.max_results, 12);
        assert_eq!(
            loaded.generation.techniques,
            vec![Technique::Portmanteau, Technique::Invented]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = NamerConfig::from_yaml_file("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, NamerError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yml"));
    }

    #[test]
    fn test_malformed_yaml_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        std::fs::write(&path, "output: [unterminated").unwrap();

        let err = NamerConfig::from_yaml_file(&path).unwrap_err();
        assert!(matches!(err, NamerError::Serialization { .. }));
        assert!(err.to_string().contains("broken.yml"));
    }

    #[test]
    fn test_empty_technique_list_rejected() {
        let mut config = NamerConfig::default();
        config.generation.techniques.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_default_keyword_rejected() {
        let mut config = NamerConfig::default();
        config.generation.default_keyword = "  -- ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let mut config = NamerConfig::default();
        config.output.max_results = 0;
        assert!(config.validate().is_err());
    }
}
