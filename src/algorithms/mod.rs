//! Standalone textbook algorithms.
//!
//! Every function here is stateless and independent of the others. They are
//! exercised by the `demo` command and by tests; the content generator
//! never calls them.

mod numeric;
mod primes;
mod sort;
mod text;

pub use numeric::{factorial, fibonacci, sum_of_squares};
pub use primes::{Primes, generate_primes, is_prime};
pub use sort::quick_sort;
pub use text::is_palindrome;
