//! Structural properties: trace and orthogonality

use abacus_core::float::{approx_eq, DEFAULT_TOLERANCE};
use abacus_core::AbacusError;

use crate::types::Matrix;

impl Matrix {
    /// Sum of the main diagonal. Fails with `NotSquare` on rectangular input.
    pub fn trace(&self) -> Result<f64, AbacusError> {
        let n = self.require_square()?;
        Ok((0..n).map(|i| self.data[i][i]).sum())
    }

    /// Orthogonality check with the default tolerance of `1e-8`.
    pub fn is_orthogonal(&self) -> Result<bool, AbacusError> {
        self.is_orthogonal_within(DEFAULT_TOLERANCE)
    }

    /// Whether `self · selfᵗ` equals the identity within `tol`, cell by cell.
    ///
    /// Fails with `InvalidArgument` for a negative tolerance and `NotSquare`
    /// for rectangular input.
    pub fn is_orthogonal_within(&self, tol: f64) -> Result<bool, AbacusError> {
        if tol < 0.0 {
            return Err(AbacusError::invalid_argument(format!(
                "tolerance must be non-negative, got {}",
                tol
            )));
        }
        let n = self.require_square()?;

        let product = self.matmul(&self.transpose()?)?;
        let identity = Matrix::identity(n);
        for r in 0..n {
            for c in 0..n {
                if !approx_eq(product.data[r][c], identity.data[r][c], tol) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
