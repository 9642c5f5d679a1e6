//! Scoring configuration types.
//!
//! Holds the weights that fold the five weighted sub-scores into the overall
//! score. Creativity is reported alongside but never weighted.

use serde::{Deserialize, Serialize};

use crate::core::errors::Result;

use super::validation::{validate_non_negative, validate_weights_sum};

/// Scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoringConfig {
    /// Weights applied to the sub-scores when computing the overall score
    #[serde(default)]
    pub weights: ScoreWeights,
}

/// Validation methods for [`ScoringConfig`].
impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()
    }
}

/// Weights for the overall score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Memorability weight
    #[serde(default = "ScoreWeights::default_memorability")]
    pub memorability: f64,

    /// Pronunciation weight
    #[serde(default = "ScoreWeights::default_pronunciation")]
    pub pronunciation: f64,

    /// Uniqueness weight
    #[serde(default = "ScoreWeights::default_uniqueness")]
    pub uniqueness: f64,

    /// Brandability weight
    #[serde(default = "ScoreWeights::default_brandability")]
    pub brandability: f64,

    /// Market appeal weight
    #[serde(default = "ScoreWeights::default_market_appeal")]
    pub market_appeal: f64,
}

/// Default implementation for [`ScoreWeights`].
impl Default for ScoreWeights {
    /// Returns the canonical weighting (0.25 / 0.20 / 0.20 / 0.20 / 0.15).
    fn default() -> Self {
        Self {
            memorability: Self::default_memorability(),
            pronunciation: Self::default_pronunciation(),
            uniqueness: Self::default_uniqueness(),
            brandability: Self::default_brandability(),
            market_appeal: Self::default_market_appeal(),
        }
    }
}

impl ScoreWeights {
    const fn default_memorability() -> f64 {
        0.25
    }

    const fn default_pronunciation() -> f64 {
        0.20
    }

    const fn default_uniqueness() -> f64 {
        0.20
    }

    const fn default_brandability() -> f64 {
        0.20
    }

    const fn default_market_appeal() -> f64 {
        0.15
    }

    /// Weights in scoring order: memorability, pronunciation, uniqueness,
    /// brandability, market appeal.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.memorability,
            self.pronunciation,
            self.uniqueness,
            self.brandability,
            self.market_appeal,
        ]
    }

    /// Validate weights configuration
    pub fn validate(&self) -> Result<()> {
        let weights = self.as_array();

        for (name, &weight) in [
            "memorability",
            "pronunciation",
            "uniqueness",
            "brandability",
            "market_appeal",
        ]
        .iter()
        .zip(&weights)
        {
            validate_non_negative(weight, &format!("scoring.weights.{name}"))?;
        }

        validate_weights_sum(&weights, 1e-6, "scoring.weights")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoreWeights::default();
        assert!(weights.validate().is_ok());
        let sum: f64 = weights.as_array().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoreWeights {
            memorability: -0.25,
            pronunciation: 0.7,
            ..ScoreWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let weights = ScoreWeights {
            memorability: 0.5,
            ..ScoreWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ScoringConfig =
            serde_yaml::from_str("weights:\n  memorability: 0.25\n").unwrap();
        assert_eq!(config.weights.market_appeal, 0.15);
        assert!(config.validate().is_ok());
    }
}
