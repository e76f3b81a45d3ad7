//! Primality testing and lazy prime enumeration.

/// Check whether `num` is prime by trial division over a 6k±1 wheel.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    // `i <= num / i` is `i * i <= num` without the overflow near i64::MAX.
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Lazy iterator over the primes strictly below a limit.
///
/// Holds only a cursor and the limit; each call to [`Iterator::next`] tests
/// candidates until it finds the next prime. Clone it to restart from the
/// current position, or call [`generate_primes`] again for a fresh sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primes {
    next_candidate: i64,
    limit: i64,
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        while self.next_candidate < self.limit {
            let candidate = self.next_candidate;
            self.next_candidate += 1;
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Primes {}

/// Primes less than `limit`, in ascending order.
pub fn generate_primes(limit: i64) -> Primes {
    Primes {
        next_candidate: 2,
        limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert!(!is_prime(-5));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(is_prime(97));
    }

    #[test]
    fn large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(is_prime(999_999_999_989));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn primes_below_twenty() {
        let primes: Vec<i64> = generate_primes(20).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn limit_is_exclusive() {
        assert_eq!(generate_primes(19).last(), Some(17));
        assert_eq!(generate_primes(3).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn empty_for_small_limits() {
        assert_eq!(generate_primes(2).next(), None);
        assert_eq!(generate_primes(-10).next(), None);
    }

    #[test]
    fn fresh_call_restarts_the_sequence() {
        let mut first = generate_primes(30);
        first.next();
        first.next();
        assert_eq!(first.next(), Some(5));

        let mut second = generate_primes(30);
        assert_eq!(second.next(), Some(2));
    }

    #[test]
    fn stays_exhausted() {
        let mut primes = generate_primes(4);
        assert_eq!(primes.next(), Some(2));
        assert_eq!(primes.next(), Some(3));
        assert_eq!(primes.next(), None);
        assert_eq!(primes.next(), None);
    }

    #[test]
    fn agrees_with_is_prime() {
        let primes: Vec<i64> = generate_primes(500).collect();
        let filtered: Vec<i64> = (0..500).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, filtered);
    }
}
