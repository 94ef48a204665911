//! Divisibility and integer products: gcd, lcm, divisors, factorial

use abacus_core::AbacusError;

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple via gcd. `lcm(0, _)` and `lcm(_, 0)` are 0.
///
/// Fails with `Overflow` when the result leaves the machine range.
pub fn lcm(a: u64, b: u64) -> Result<u64, AbacusError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or_else(|| AbacusError::overflow(format!("lcm({}, {})", a, b)))
}

/// All positive divisors of `n`, ascending.
///
/// Trial division up to the square root, collecting each divisor with its
/// complement. Fails with `InvalidArgument` for `n == 0`, which has no
/// finite divisor list.
pub fn divisors(n: u64) -> Result<Vec<u64>, AbacusError> {
    if n == 0 {
        return Err(AbacusError::invalid_argument(
            "divisors requires a positive value",
        ));
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut i = 1;
    while i * i <= n {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
        i += 1;
    }
    large.reverse();
    small.extend(large);
    Ok(small)
}

/// `n!` with checked multiplication. Fails with `Overflow` past `20!`.
pub fn factorial(n: u64) -> Result<u64, AbacusError> {
    let mut acc: u64 = 1;
    for i in 2..=n {
        acc = acc
            .checked_mul(i)
            .ok_or_else(|| AbacusError::overflow(format!("factorial({})", n)))?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(18, 48), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(7, 13).unwrap(), 91);
        assert_eq!(lcm(0, 5).unwrap(), 0);
    }

    #[test]
    fn test_lcm_gcd_product_identity() {
        let (a, b) = (252u64, 105u64);
        assert_eq!(gcd(a, b) * lcm(a, b).unwrap(), a * b);
    }

    #[test]
    fn test_lcm_overflow() {
        let err = lcm(u64::MAX, u64::MAX - 1).unwrap_err();
        assert!(matches!(err, AbacusError::Overflow { .. }));
    }

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(1).unwrap(), vec![1]);
        assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(36).unwrap(), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
        assert_eq!(divisors(13).unwrap(), vec![1, 13]);
    }

    #[test]
    fn test_divisors_rejects_zero() {
        assert!(matches!(
            divisors(0).unwrap_err(),
            AbacusError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_overflows_past_twenty() {
        assert_eq!(
            factorial(21).unwrap_err(),
            AbacusError::overflow("factorial(21)")
        );
    }
}
