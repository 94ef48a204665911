//! One-call descriptive summary

use abacus_core::AbacusError;
use serde::{Deserialize, Serialize};

use crate::helpers::{require_non_empty, sorted};
use crate::{mean, median, stddev_population, variance_population};

/// Descriptive summary of a data set.
///
/// Uses population variance so single-value data stays well-defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
    pub stddev: f64,
}

/// Compute all descriptive statistics for `values` in one pass over the API.
pub fn describe(values: &[f64]) -> Result<Summary, AbacusError> {
    require_non_empty(values, "describe")?;

    let sorted_values = sorted(values);
    Ok(Summary {
        count: values.len(),
        min: sorted_values[0],
        max: sorted_values[sorted_values.len() - 1],
        mean: mean(values)?,
        median: median(values)?,
        variance: variance_population(values)?,
        stddev: stddev_population(values)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_matches_individual_statistics() {
        let values = [2.0, 4.0, 5.0, 9.0];
        let summary = describe(&values).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.mean, mean(&values).unwrap());
        assert_eq!(summary.median, median(&values).unwrap());
        assert_eq!(summary.variance, variance_population(&values).unwrap());
        assert_eq!(summary.stddev, summary.variance.sqrt());
    }

    #[test]
    fn test_describe_single_value() {
        let summary = describe(&[42.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 42.0);
        assert_eq!(summary.variance, 0.0);
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(
            describe(&[]).unwrap_err(),
            AbacusError::empty_data("describe")
        );
    }

    #[test]
    fn test_summary_serializes() {
        let summary = describe(&[1.0, 2.0, 3.0]).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let back: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }
}
