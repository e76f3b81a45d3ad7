//! The fixed catalog of snippets a generated file is assembled from.

use serde::Serialize;

/// A predefined snippet: identifier, one-line description and source body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// Every template the generator can choose from.
pub static CATALOG: [Template; 5] = [
    Template {
        id: "fibonacci",
        description: "Compute the nth Fibonacci number iteratively.",
        code: r#"
/// Return the nth Fibonacci number using an iterative method.
pub fn fibonacci(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}
"#,
    },
    Template {
        id: "factorial",
        description: "Compute the factorial of a non-negative integer recursively.",
        code: r#"
/// Return the factorial of n using recursion.
pub fn factorial(n: i64) -> Result<u64, String> {
    if n < 0 {
        return Err("n must be non-negative".to_string());
    }
    Ok(if n <= 1 { 1 } else { n as u64 * factorial(n - 1)? })
}
"#,
    },
    Template {
        id: "is_palindrome",
        description: "Check if a given string is a palindrome.",
        code: r#"
/// Check if a given string is a palindrome ignoring non-alphanumeric characters.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}
"#,
    },
    Template {
        id: "sum_of_squares",
        description: "Calculate the sum of squares of numbers up to n.",
        code: r#"
/// Return the sum of squares from 1 to n.
pub fn sum_of_squares(n: u64) -> u64 {
    (1..=n).map(|i| i * i).sum()
}
"#,
    },
    Template {
        id: "quick_sort",
        description: "Sort a list of integers using the Quick Sort algorithm.",
        code: r#"
/// Return a new sorted vector using the Quick Sort algorithm.
pub fn quick_sort(arr: &[i64]) -> Vec<i64> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let pivot = arr[arr.len() / 2];
    let mut sorted = quick_sort(&arr.iter().copied().filter(|&x| x < pivot).collect::<Vec<_>>());
    sorted.extend(arr.iter().copied().filter(|&x| x == pivot));
    sorted.extend(quick_sort(&arr.iter().copied().filter(|&x| x > pivot).collect::<Vec<_>>()));
    sorted
}
"#,
    },
];
