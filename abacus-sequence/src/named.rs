//! Named integer sequences
//!
//! fibonacci, collatz, farey

use abacus_core::AbacusError;

use crate::helpers::require_count;

/// First `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
///
/// Terms are `u64`; the sequence outgrows the machine range past the 94th
/// term and fails with `Overflow` rather than wrapping.
pub fn fibonacci(n: usize) -> Result<Vec<u64>, AbacusError> {
    require_count(n, "fibonacci")?;

    let mut out = Vec::with_capacity(n);
    let (mut a, mut b): (u64, u64) = (0, 1);
    out.push(a);
    if n > 1 {
        out.push(b);
    }
    while out.len() < n {
        let next = a
            .checked_add(b)
            .ok_or_else(|| AbacusError::overflow("fibonacci"))?;
        a = b;
        b = next;
        out.push(next);
    }
    Ok(out)
}

/// Collatz orbit of `start` down to 1, inclusive of both endpoints.
///
/// Fails with `InvalidArgument` for `start == 0` and with `Overflow` if the
/// 3n+1 step leaves the machine range.
pub fn collatz(start: u64) -> Result<Vec<u64>, AbacusError> {
    if start == 0 {
        return Err(AbacusError::invalid_argument(
            "collatz requires a positive starting value",
        ));
    }

    let mut out = vec![start];
    let mut n = start;
    while n != 1 {
        n = if n % 2 == 0 {
            n / 2
        } else {
            n.checked_mul(3)
                .and_then(|t| t.checked_add(1))
                .ok_or_else(|| AbacusError::overflow("collatz"))?
        };
        out.push(n);
    }
    Ok(out)
}

/// Farey sequence of the given order: every reduced fraction in `[0, 1]`
/// with denominator at most `order`, ascending, as `(numerator,
/// denominator)` pairs.
///
/// Uses the neighbor recurrence: from adjacent terms a/b and c/d, the next
/// term is ((k·c - a) / (k·d - b)) with k = (order + b) / d.
pub fn farey(order: u64) -> Result<Vec<(u64, u64)>, AbacusError> {
    if order == 0 {
        return Err(AbacusError::invalid_argument(
            "farey requires a positive order",
        ));
    }

    let mut out = vec![(0, 1), (1, order)];
    let (mut a, mut b) = (0u64, 1u64);
    let (mut c, mut d) = (1u64, order);
    while c < d {
        let k = (order + b) / d;
        let next = (k * c - a, k * d - b);
        a = c;
        b = d;
        c = next.0;
        d = next.1;
        out.push(next);
    }
    Ok(out)
}
