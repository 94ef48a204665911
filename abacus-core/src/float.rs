//! Shared f64 helpers
//!
//! Matrix cells and statistics values are plain `f64` throughout the
//! workspace, so integer-valued inputs may pick up negligible floating-point
//! error unless a routine rounds explicitly (the determinant does).

/// Tolerance used by approximate comparisons when the caller supplies none.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Round `x` to `digits` decimal digits.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}

/// Whether `a` and `b` agree within `tol` (`|a - b| <= tol`).
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
