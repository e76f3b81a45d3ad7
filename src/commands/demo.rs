//! Implementation of `dailycode demo`: runs each library algorithm on a
//! fixed input and prints the result.

use super::stdout_error;
use crate::algorithms::{
    factorial, fibonacci, generate_primes, is_palindrome, quick_sort, sum_of_squares,
};
use crate::error::Result;
use std::io::{self, Write};

const SAMPLE_LIST: [i64; 8] = [3, 6, 2, 7, 5, 8, 1, 4];
const SAMPLE_PHRASE: &str = "A man, a plan, a canal: Panama";

pub fn cmd_demo() -> Result<()> {
    write_demo(&mut io::stdout().lock())
}

/// Write the demonstration output to `out`.
pub fn write_demo<W: Write>(out: &mut W) -> Result<()> {
    let primes: Vec<i64> = generate_primes(20).collect();

    let lines = [
        format!("Factorial of 5: {}", factorial(5)?),
        format!("Primes less than 20: {:?}", primes),
        format!("Original list: {:?}", SAMPLE_LIST),
        format!("Sorted list: {:?}", quick_sort(&SAMPLE_LIST)),
        format!("Fibonacci number 10: {}", fibonacci(10)?),
        format!("Sum of squares up to 10: {}", sum_of_squares(10)?),
        format!(
            "Is {:?} a palindrome? {}",
            SAMPLE_PHRASE,
            is_palindrome(SAMPLE_PHRASE)
        ),
    ];

    for line in lines {
        writeln!(out, "{}", line).map_err(stdout_error)?;
    }
    Ok(())
}
