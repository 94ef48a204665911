//! Core matrix type and shape validation

use std::fmt;

use abacus_core::AbacusError;
use serde::{Deserialize, Serialize};

/// A dense, row-major matrix of `f64` cells.
///
/// Well-formed matrices have at least one row and rows of equal length. The
/// nested-data constructor enforces both, so arithmetic can trust the cached
/// dimensions. The factories can still hand out a degenerate zero-row value
/// (see [`Matrix::filled`]), which [`Matrix::shape`] rejects on
/// re-validation.
///
/// Serialization uses the nested-row form, re-validating on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    pub(crate) data: Vec<Vec<f64>>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Matrix {
    /// Build a matrix from nested rows, validating its structure.
    ///
    /// Fails with `InvalidMatrix` when `data` has no rows, or when any row's
    /// length differs from the first row's. The column count is taken from
    /// row 0.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self, AbacusError> {
        if data.is_empty() {
            return Err(AbacusError::invalid_matrix("matrix has no rows"));
        }

        let cols = data[0].len();
        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(AbacusError::invalid_matrix(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        let rows = data.len();
        Ok(Self { data, rows, cols })
    }

    /// Validated dimensions as a `(rows, cols)` pair.
    ///
    /// Fails with `InvalidMatrix` on a degenerate zero-row matrix. Every
    /// operation calls this on each operand before computing anything.
    pub fn shape(&self) -> Result<(usize, usize), AbacusError> {
        if self.rows == 0 {
            return Err(AbacusError::invalid_matrix("matrix has no rows"));
        }
        Ok((self.rows, self.cols))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The rows as slices, row-major.
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Consume the matrix into its nested rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Shape check shared by every square-only operation.
    pub(crate) fn require_square(&self) -> Result<usize, AbacusError> {
        let (rows, cols) = self.shape()?;
        if rows != cols {
            return Err(AbacusError::NotSquare { rows, cols });
        }
        Ok(rows)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = AbacusError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
