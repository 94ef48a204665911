//! Central tendency: mean, median, mode

use abacus_core::AbacusError;

use crate::helpers::{require_non_empty, sorted, sum};

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64, AbacusError> {
    require_non_empty(values, "mean")?;
    Ok(sum(values) / values.len() as f64)
}

/// Middle value of the sorted data; the average of the two middle values for
/// an even count.
pub fn median(values: &[f64]) -> Result<f64, AbacusError> {
    require_non_empty(values, "median")?;

    let sorted_values = sorted(values);
    let n = sorted_values.len();
    if n % 2 == 1 {
        Ok(sorted_values[n / 2])
    } else {
        Ok((sorted_values[n / 2 - 1] + sorted_values[n / 2]) / 2.0)
    }
}

/// All values of maximal frequency, ascending.
///
/// Unimodal data yields a single element; ties yield every tied value, so a
/// slice of distinct values returns all of them.
pub fn mode(values: &[f64]) -> Result<Vec<f64>, AbacusError> {
    require_non_empty(values, "mode")?;

    let sorted_values = sorted(values);

    // Count runs of equal values in the sorted copy.
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &value in &sorted_values {
        match runs.last_mut() {
            Some((current, count)) if *current == value => *count += 1,
            _ => runs.push((value, 1)),
        }
    }

    let best = runs.iter().map(|&(_, count)| count).max().unwrap_or(0);
    Ok(runs
        .into_iter()
        .filter(|&(_, count)| count == best)
        .map(|(value, _)| value)
        .collect())
}
