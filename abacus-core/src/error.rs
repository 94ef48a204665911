//! Unified error type for the Abacus workspace
//!
//! Errors are values: every fallible operation detects its failure eagerly,
//! before any computation, and returns it to the caller. Nothing is retried,
//! swallowed, or partially computed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by any Abacus crate.
///
/// The matrix variants mirror the validation order of the matrix operations:
/// structural validity first (`InvalidMatrix`), then operand compatibility
/// (`ShapeMismatch` / `DimensionMismatch` / `NotSquare`), then scalar
/// parameters (`InvalidArgument`).
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum AbacusError {
    /// Structurally malformed matrix: zero rows, or rows of unequal length.
    #[error("invalid matrix: {reason}")]
    InvalidMatrix { reason: String },

    /// Elementwise binary operation on operands of differing shape.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Matrix product whose inner dimensions disagree.
    #[error("incompatible dimensions for multiplication: {left:?} and {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Square-only operation applied to a rectangular matrix.
    #[error("requires a square matrix, got {rows}×{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Malformed scalar parameter (negative exponent, negative tolerance, ...).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Statistic or aggregate requested over no data.
    #[error("{what} requires at least one value")]
    EmptyData { what: String },

    /// Division by zero in scalar computation.
    #[error("division by zero")]
    DivisionByZero,

    /// Checked integer arithmetic exceeded the machine range.
    #[error("overflow computing {what}")]
    Overflow { what: String },
}

impl AbacusError {
    /// Structurally malformed matrix.
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Malformed scalar parameter.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Empty input where at least one value is required.
    pub fn empty_data(what: impl Into<String>) -> Self {
        Self::EmptyData { what: what.into() }
    }

    /// Integer overflow while computing `what`.
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow { what: what.into() }
    }
}
