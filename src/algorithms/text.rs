/// Check whether `s` reads the same forwards and backwards, ignoring case
/// and anything that is not alphanumeric.
///
/// Input with no alphanumeric characters normalizes to the empty string and
/// counts as a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}
