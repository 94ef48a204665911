//! Abacus Sequence - Classical sequence generators
//!
//! - Progressions (arithmetic, geometric, harmonic)
//! - Named integer sequences (fibonacci, collatz, farey)
//!
//! Generators return fully materialized vectors and cap the requested length
//! (see `MAX_TERMS`), so a bad count fails fast instead of exhausting memory.

mod generators;
mod helpers;
mod named;

pub use generators::{arithmetic, geometric, harmonic};
pub use helpers::MAX_TERMS;
pub use named::{collatz, farey, fibonacci};
