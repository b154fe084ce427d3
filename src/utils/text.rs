pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Exact comparison of `word` against its reverse. Case and whitespace count.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}
