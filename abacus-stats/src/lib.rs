//! Abacus Statistics - Descriptive statistics
//!
//! Flat descriptive statistics over `&[f64]` slices:
//! - Central tendency (mean, median, mode)
//! - Dispersion (variance, stddev, range)
//! - One-call summaries (describe)
//!
//! Every function validates its input eagerly and returns `AbacusError` on
//! empty or undersized data instead of panicking.

mod central;
mod dispersion;
mod helpers;
mod summary;

pub use central::{mean, median, mode};
pub use dispersion::{range, stddev, stddev_population, variance, variance_population};
pub use summary::{describe, Summary};
