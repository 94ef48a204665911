//! Helper functions for statistical operations
//!
//! Common validation and small numeric utilities shared by the statistics
//! modules.

use abacus_core::AbacusError;

/// Sum of all values.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Newly allocated copy of `values`, sorted ascending by total order.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Require at least one value.
pub fn require_non_empty(values: &[f64], what: &str) -> Result<(), AbacusError> {
    if values.is_empty() {
        return Err(AbacusError::empty_data(what));
    }
    Ok(())
}

/// Require at least `min` values.
pub fn require_min_count(values: &[f64], min: usize, what: &str) -> Result<(), AbacusError> {
    if values.len() < min {
        return Err(AbacusError::invalid_argument(format!(
            "{} requires at least {} values, got {}",
            what,
            min,
            values.len()
        )));
    }
    Ok(())
}
