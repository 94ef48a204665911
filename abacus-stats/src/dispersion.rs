//! Dispersion: variance, standard deviation, range

use abacus_core::AbacusError;

use crate::helpers::{require_min_count, require_non_empty, sorted};
use crate::mean;

fn squared_deviations(values: &[f64]) -> Result<f64, AbacusError> {
    let m = mean(values)?;
    Ok(values.iter().map(|x| (x - m) * (x - m)).sum())
}

/// Sample variance (divisor `n - 1`). Requires at least two values.
pub fn variance(values: &[f64]) -> Result<f64, AbacusError> {
    require_min_count(values, 2, "variance")?;
    Ok(squared_deviations(values)? / (values.len() - 1) as f64)
}

/// Population variance (divisor `n`).
pub fn variance_population(values: &[f64]) -> Result<f64, AbacusError> {
    require_non_empty(values, "variance_population")?;
    Ok(squared_deviations(values)? / values.len() as f64)
}

/// Sample standard deviation.
pub fn stddev(values: &[f64]) -> Result<f64, AbacusError> {
    Ok(variance(values)?.sqrt())
}

/// Population standard deviation.
pub fn stddev_population(values: &[f64]) -> Result<f64, AbacusError> {
    Ok(variance_population(values)?.sqrt())
}

/// Difference between the largest and smallest value.
pub fn range(values: &[f64]) -> Result<f64, AbacusError> {
    require_non_empty(values, "range")?;
    let sorted_values = sorted(values);
    Ok(sorted_values[sorted_values.len() - 1] - sorted_values[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance_sample() {
        // Deviations from mean 5: -3, -1, 0, 4; squares sum to 26.
        assert_eq!(variance(&[2.0, 4.0, 5.0, 9.0]).unwrap(), 26.0 / 3.0);
    }

    #[test]
    fn test_variance_requires_two_values() {
        assert!(matches!(
            variance(&[1.0]).unwrap_err(),
            AbacusError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_variance_population() {
        assert_eq!(variance_population(&[2.0, 4.0, 5.0, 9.0]).unwrap(), 6.5);
        assert_eq!(variance_population(&[3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_stddev() {
        assert_eq!(stddev_population(&[1.0, 1.0, 4.0, 4.0]).unwrap(), 1.5);
        assert_eq!(stddev(&[1.0, 3.0]).unwrap(), 2.0f64.sqrt());
    }

    #[test]
    fn test_range() {
        assert_eq!(range(&[4.0, -1.0, 7.5, 0.0]).unwrap(), 8.5);
        assert_eq!(range(&[2.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_range_empty() {
        assert_eq!(
            range(&[]).unwrap_err(),
            AbacusError::empty_data("range")
        );
    }
}
