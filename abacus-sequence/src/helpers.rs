//! Shared input validation for sequence generators

use abacus_core::AbacusError;

/// Upper bound on generated sequence length.
pub const MAX_TERMS: usize = 100_000;

/// Require a positive term count no larger than `MAX_TERMS`.
pub fn require_count(n: usize, what: &str) -> Result<(), AbacusError> {
    if n == 0 {
        return Err(AbacusError::invalid_argument(format!(
            "{} requires a positive term count",
            what
        )));
    }
    if n > MAX_TERMS {
        return Err(AbacusError::invalid_argument(format!(
            "{} is limited to {} terms, got {}",
            what, MAX_TERMS, n
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_count() {
        assert!(require_count(1, "arithmetic").is_ok());
        assert!(require_count(MAX_TERMS, "arithmetic").is_ok());
        assert!(require_count(0, "arithmetic").is_err());
        assert!(require_count(MAX_TERMS + 1, "arithmetic").is_err());
    }
}
