//! Progression generators
//!
//! arithmetic, geometric, harmonic

use abacus_core::AbacusError;

use crate::helpers::require_count;

/// First `n` terms of the arithmetic progression starting at `first` with
/// common difference `step`.
pub fn arithmetic(first: f64, step: f64, n: usize) -> Result<Vec<f64>, AbacusError> {
    require_count(n, "arithmetic")?;
    Ok((0..n).map(|i| first + step * i as f64).collect())
}

/// First `n` terms of the geometric progression starting at `first` with
/// common ratio `ratio`.
pub fn geometric(first: f64, ratio: f64, n: usize) -> Result<Vec<f64>, AbacusError> {
    require_count(n, "geometric")?;

    let mut out = Vec::with_capacity(n);
    let mut term = first;
    for _ in 0..n {
        out.push(term);
        term *= ratio;
    }
    Ok(out)
}

/// First `n` terms of the harmonic progression: reciprocals of the
/// arithmetic progression. Fails with `DivisionByZero` when any underlying
/// arithmetic term is zero.
pub fn harmonic(first: f64, step: f64, n: usize) -> Result<Vec<f64>, AbacusError> {
    let terms = arithmetic(first, step, n)?;
    terms
        .into_iter()
        .map(|t| {
            if t == 0.0 {
                Err(AbacusError::DivisionByZero)
            } else {
                Ok(1.0 / t)
            }
        })
        .collect()
}
