//! Abacus Matrix - Dense matrix algebra
//!
//! Textbook-standard dense matrix routines over `f64` cells:
//! - Construction (from_rows, filled, zeros, identity)
//! - Shape validation and queries (shape, is_square)
//! - Arithmetic (add, sub, scale, matmul, transpose, pow)
//! - Structural properties (trace, is_orthogonal)
//! - Determinant, minors, and cofactors via recursive cofactor expansion
//!
//! Matrices are immutable values: every operation reads its operands and
//! allocates a new result, so distinct instances can be used from independent
//! call sites concurrently. All validation is eager; failures surface as
//! `AbacusError` before any computation starts.

mod construct;
mod det;
mod ops;
mod props;
mod types;

pub use types::Matrix;
