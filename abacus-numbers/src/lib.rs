//! Abacus Numbers - Elementary number theory
//!
//! - Divisibility (gcd, lcm, divisors, factorial)
//! - Primality (is_prime, primes_up_to)
//! - Digit arithmetic (digits, is_armstrong)
//!
//! Everything operates on `u64` with checked arithmetic; results that would
//! leave the machine range fail with `Overflow` instead of wrapping.

mod digits;
mod integers;
mod primes;

pub use digits::{digits, is_armstrong};
pub use integers::{divisors, factorial, gcd, lcm};
pub use primes::{is_prime, primes_up_to};
