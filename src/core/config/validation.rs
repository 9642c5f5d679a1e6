//! Validation helper functions for configuration types.

use crate::core::errors::{NamerError, Result};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(NamerError::validation_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a usize value is within a bounded range (inclusive).
pub fn validate_bounded_usize(value: usize, min: usize, max: usize, field: &str) -> Result<()> {
    if value < min || value > max {
        return Err(NamerError::validation_field(
            format!("{} must be between {} and {}, got {}", field, min, max, value),
            field,
        ));
    }
    Ok(())
}

/// Validate that an f64 value is non-negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<()> {
    if value < 0.0 || value.is_nan() {
        return Err(NamerError::validation_field(
            format!("{} must be non-negative", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that an f64 value lies on the score scale [0.0, 10.0].
pub fn validate_score_range(value: f64, field: &str) -> Result<()> {
    if !(0.0..=10.0).contains(&value) {
        return Err(NamerError::validation_field(
            format!("{} must be between 0.0 and 10.0, got {}", field, value),
            field,
        ));
    }
    Ok(())
}

/// Validate that weights sum to approximately 1.0 (within tolerance).
pub fn validate_weights_sum(weights: &[f64], tolerance: f64, field: &str) -> Result<()> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(NamerError::validation_field(
            format!("{} should sum to approximately 1.0, got {:.3}", field, sum),
            field,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_usize() {
        assert!(validate_positive_usize(1, "max_results").is_ok());
        assert!(validate_positive_usize(0, "max_results").is_err());
    }

    #[test]
    fn test_bounded_usize() {
        assert!(validate_bounded_usize(4, 1, 20, "min_blend_len").is_ok());
        assert!(validate_bounded_usize(21, 1, 20, "min_blend_len").is_err());
        assert!(validate_bounded_usize(0, 1, 20, "min_blend_len").is_err());
    }

    #[test]
    fn test_score_range() {
        assert!(validate_score_range(7.0, "min_overall").is_ok());
        assert!(validate_score_range(10.0, "min_overall").is_ok());
        assert!(validate_score_range(10.5, "min_overall").is_err());
        assert!(validate_score_range(-0.1, "min_overall").is_err());
    }

    #[test]
    fn test_weights_sum() {
        assert!(validate_weights_sum(&[0.25, 0.2, 0.2, 0.2, 0.15], 1e-6, "weights").is_ok());
        assert!(validate_weights_sum(&[0.5, 0.6], 1e-6, "weights").is_err());
    }

    #[test]
    fn test_non_negative_rejects_nan() {
        assert!(validate_non_negative(0.0, "weight").is_ok());
        assert!(validate_non_negative(f64::NAN, "weight").is_err());
    }
}
