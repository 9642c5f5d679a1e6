//! Filter threshold configuration types.

use serde::{Deserialize, Serialize};

use crate::core::errors::{NamerError, Result};

use super::validation::{validate_positive_usize, validate_score_range};

/// Quality thresholds a scored name must meet to survive filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterThresholds {
    /// Minimum overall score
    pub min_overall: f64,
    /// Minimum memorability sub-score
    pub min_memorability: f64,
    /// Minimum pronunciation sub-score
    pub min_pronunciation: f64,
    /// Minimum name length in characters
    pub min_length: usize,
    /// Maximum name length in characters
    pub max_length: usize,
}

impl FilterThresholds {
    /// The standard thresholds: overall 7.0, memorability and pronunciation
    /// 6.0, length 3..=20.
    pub fn standard() -> Self {
        Self {
            min_overall: 7.0,
            min_memorability: 6.0,
            min_pronunciation: 6.0,
            min_length: 3,
            max_length: 20,
        }
    }

    /// Thresholds used for the single retry when nothing survives.
    pub fn relaxed() -> Self {
        Self {
            min_overall: 6.0,
            min_memorability: 5.0,
            min_pronunciation: 5.0,
            ..Self::standard()
        }
    }

    /// Validate a threshold set; `section` prefixes field names in errors.
    pub fn validate(&self, section: &str) -> Result<()> {
        validate_score_range(self.min_overall, &format!("{section}.min_overall"))?;
        validate_score_range(self.min_memorability, &format!("{section}.min_memorability"))?;
        validate_score_range(
            self.min_pronunciation,
            &format!("{section}.min_pronunciation"),
        )?;
        validate_positive_usize(self.min_length, &format!("{section}.min_length"))?;

        if self.max_length < self.min_length {
            return Err(NamerError::validation_field(
                format!(
                    "max_length ({}) must not be smaller than min_length ({})",
                    self.max_length, self.min_length
                ),
                format!("{section}.max_length"),
            ));
        }

        Ok(())
    }
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Thresholds applied on the first pass
    #[serde(default = "FilterThresholds::standard")]
    pub thresholds: FilterThresholds,

    /// Thresholds applied when the first pass leaves nothing
    #[serde(default = "FilterThresholds::relaxed")]
    pub relaxed: FilterThresholds,

    /// Retry once with the relaxed thresholds when the first pass is empty
    #[serde(default = "FilterConfig::default_relaxed_retry")]
    pub relaxed_retry: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            thresholds: FilterThresholds::standard(),
            relaxed: FilterThresholds::relaxed(),
            relaxed_retry: Self::default_relaxed_retry(),
        }
    }
}

impl FilterConfig {
    const fn default_relaxed_retry() -> bool {
        true
    }

    /// Validate filter configuration
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate("filter.thresholds")?;
        self.relaxed.validate("filter.relaxed")?;

        if self.relaxed.min_overall > self.thresholds.min_overall {
            return Err(NamerError::config_field(
                "relaxed min_overall must not be stricter than the standard threshold",
                "filter.relaxed.min_overall",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds() {
        let t = FilterThresholds::standard();
        assert_eq!(t.min_overall, 7.0);
        assert_eq!(t.min_memorability, 6.0);
        assert_eq!(t.min_pronunciation, 6.0);
        assert_eq!((t.min_length, t.max_length), (3, 20));
    }

    #[test]
    fn test_default_config_validates() {
        assert!(FilterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_length_bounds_rejected() {
        let t = FilterThresholds {
            min_length: 10,
            max_length: 5,
            ..FilterThresholds::standard()
        };
        assert!(t.validate("filter.thresholds").is_err());
    }

    #[test]
    fn test_stricter_relaxed_thresholds_rejected() {
        let config = FilterConfig {
            relaxed: FilterThresholds {
                min_overall: 8.0,
                ..FilterThresholds::relaxed()
            },
            ..FilterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
