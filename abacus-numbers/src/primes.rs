//! Primality: trial division and the sieve of Eratosthenes

/// Whether `n` is prime. Trial division by 2, 3, then 6k ± 1 up to √n.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All primes less than or equal to `limit`, ascending, by sieve of
/// Eratosthenes. `limit < 2` yields an empty vector.
pub fn primes_up_to(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for i in 2..=limit {
        if composite[i] {
            continue;
        }
        primes.push(i as u64);
        let mut multiple = i * i;
        while multiple <= limit {
            composite[multiple] = true;
            multiple += i;
        }
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
    }

    #[test]
    fn test_is_prime_larger_values() {
        assert!(is_prime(97));
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
        assert!(!is_prime(1_000_000));
        // Carmichael number: composite despite passing weak Fermat checks.
        assert!(!is_prime(561));
    }

    #[test]
    fn test_primes_up_to() {
        assert_eq!(primes_up_to(1), Vec::<u64>::new());
        assert_eq!(primes_up_to(2), vec![2]);
        assert_eq!(
            primes_up_to(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_sieve_agrees_with_trial_division() {
        let sieved = primes_up_to(500);
        let checked: Vec<u64> = (0..=500).filter(|&n| is_prime(n)).collect();
        assert_eq!(sieved, checked);
    }

    #[test]
    fn test_primes_up_to_100_has_25_terms() {
        assert_eq!(primes_up_to(100).len(), 25);
    }
}
