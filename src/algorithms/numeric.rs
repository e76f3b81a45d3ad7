//! Integer sequences: Fibonacci, factorial and sum of squares.

use crate::error::{DailyCodeError, Result};

/// Return the nth Fibonacci number of the sequence 0, 1, 1, 2, 3, 5, ...
///
/// Computed iteratively. Any `n <= 0` yields 0.
pub fn fibonacci(n: i64) -> Result<u128> {
    if n <= 0 {
        return Ok(0);
    }
    let (mut a, mut b): (u128, u128) = (0, 1);
    for _ in 1..n {
        let next = a
            .checked_add(b)
            .ok_or_else(|| DailyCodeError::Overflow(format!("fibonacci({}) exceeds u128", n)))?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Largest `n` whose factorial fits in `u128`.
const MAX_FACTORIAL_INPUT: i64 = 34;

/// Return `n!` computed recursively.
///
/// Recursion depth equals `n`. Inputs whose factorial cannot fit in `u128`
/// are rejected before recursing, so the stack never holds more than 34 frames.
///
/// # Errors
///
/// * `InvalidArgument` for negative `n`
/// * `Overflow` when the result does not fit in `u128`
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(DailyCodeError::InvalidArgument(
            "factorial is only defined for non-negative integers".to_string(),
        ));
    }
    if n <= 1 {
        return Ok(1);
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(DailyCodeError::Overflow(format!("factorial({}) exceeds u128", n)));
    }
    let rest = factorial(n - 1)?;
    rest.checked_mul(n as u128)
        .ok_or_else(|| DailyCodeError::Overflow(format!("factorial({}) exceeds u128", n)))
}

/// Return the sum of `i * i` for `i` in `1..=n`. Any `n <= 0` yields 0.
///
/// Uses `n(n+1)(2n+1)/6`. The divisions by 2 and 3 happen on the factors
/// before multiplying, so only a result that truly exceeds `u128` overflows.
pub fn sum_of_squares(n: i64) -> Result<u128> {
    if n <= 0 {
        return Ok(0);
    }
    let n = n as u128;
    let mut factors = [n, n + 1, 2 * n + 1];
    for divisor in [2, 3] {
        if let Some(f) = factors.iter_mut().find(|f| **f % divisor == 0) {
            *f /= divisor;
        }
    }
    factors
        .iter()
        .try_fold(1u128, |acc, &f| acc.checked_mul(f))
        .ok_or_else(|| DailyCodeError::Overflow(format!("sum_of_squares({}) exceeds u128", n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fibonacci_matches_known_prefix() {
        let expected = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as i64).unwrap(), *want, "fibonacci({})", n);
        }
    }

    #[test]
    fn fibonacci_of_non_positive_is_zero() {
        assert_eq!(fibonacci(0).unwrap(), 0);
        assert_eq!(fibonacci(-7).unwrap(), 0);
    }

    #[test]
    fn fibonacci_largest_representable() {
        assert_eq!(
            fibonacci(186).unwrap(),
            332825110087067562321196029789634457848
        );
        assert!(matches!(fibonacci(187), Err(DailyCodeError::Overflow(_))));
    }

    #[test]
    fn factorial_base_cases() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
    }

    #[test]
    fn factorial_rejects_negative_input() {
        let err = factorial(-1).unwrap_err();
        assert!(matches!(err, DailyCodeError::InvalidArgument(_)));
    }

    #[test]
    fn factorial_overflow_is_reported() {
        assert!(factorial(34).is_ok());
        assert!(matches!(factorial(35), Err(DailyCodeError::Overflow(_))));
        assert!(matches!(factorial(i64::MAX), Err(DailyCodeError::Overflow(_))));
    }

    #[test]
    fn sum_of_squares_small_values() {
        assert_eq!(sum_of_squares(0).unwrap(), 0);
        assert_eq!(sum_of_squares(-3).unwrap(), 0);
        assert_eq!(sum_of_squares(1).unwrap(), 1);
        assert_eq!(sum_of_squares(3).unwrap(), 14);
    }

    #[test]
    fn sum_of_squares_overflow_is_reported_immediately() {
        let started = std::time::Instant::now();
        let err = sum_of_squares(i64::MAX).unwrap_err();
        assert!(matches!(err, DailyCodeError::Overflow(_)));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn sum_of_squares_large_value_fits() {
        // 1e12 is well inside u128; the closed form is exact.
        let n: u128 = 1_000_000_000_000;
        assert_eq!(
            sum_of_squares(n as i64).unwrap(),
            n * (n + 1) * (2 * n + 1) / 6
        );
    }

    proptest! {
        #[test]
        fn sum_of_squares_matches_loop(n in 0i64..=2_000) {
            let expected: u128 = (1..=n as u128).map(|i| i * i).sum();
            prop_assert_eq!(sum_of_squares(n).unwrap(), expected);
        }

        #[test]
        fn factorial_is_recursive_product(n in 2i64..=34) {
            prop_assert_eq!(factorial(n).unwrap(), n as u128 * factorial(n - 1).unwrap());
        }

        #[test]
        fn fibonacci_obeys_recurrence(n in 2i64..=186) {
            prop_assert_eq!(
                fibonacci(n).unwrap(),
                fibonacci(n - 1).unwrap() + fibonacci(n - 2).unwrap()
            );
        }

        #[test]
        fn sum_of_squares_matches_closed_form(n in 1i64..=5_000) {
            let n128 = n as u128;
            prop_assert_eq!(sum_of_squares(n).unwrap(), n128 * (n128 + 1) * (2 * n128 + 1) / 6);
        }
    }
}
