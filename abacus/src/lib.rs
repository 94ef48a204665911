//! Abacus - Self-contained numeric routines
//!
//! Textbook-standard implementations of descriptive statistics, elementary
//! number theory, dense matrix algebra, and classical sequences, for callers
//! that want correct small-scale numerics without a heavyweight dependency.
//!
//! The topic crates are re-exported as modules:
//! - [`matrix`]: dense matrix algebra (the [`Matrix`] type)
//! - [`stats`]: descriptive statistics over `&[f64]`
//! - [`numbers`]: gcd, primes, divisors, factorials, Armstrong numbers
//! - [`sequence`]: progressions, Fibonacci, Collatz, Farey
//!
//! Everything is a pure in-process function: no I/O, no configuration, no
//! shared state. Failures are `AbacusError` values raised eagerly at the
//! call boundary.

pub use abacus_core::{float, AbacusError};
pub use abacus_matrix::Matrix;

pub use abacus_matrix as matrix;
pub use abacus_numbers as numbers;
pub use abacus_sequence as sequence;
pub use abacus_stats as stats;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::float::{approx_eq, round_to, DEFAULT_TOLERANCE};
    pub use crate::{AbacusError, Matrix};
}
