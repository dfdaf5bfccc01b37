//! Tokenizer shared by the rulebook and the Naive Bayes judge.
//!
//! Lowercases, blanks out everything except `a-z`, digits, whitespace,
//! apostrophes and hyphens, then splits on whitespace runs.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the pattern is a literal checked by the tests below
static STRIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s'-]").expect("Invalid regex: token strip pattern"));

/// Split raw text into lowercase word tokens.
///
/// Pure and total: empty or punctuation-only input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    STRIP_PATTERN
        .replace_all(&lower, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(tokenize("Hello, World!!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("?!... ,;").is_empty());
    }

    #[test]
    fn test_keeps_apostrophes_and_hyphens() {
        assert_eq!(
            tokenize("It's a well-known fact, isn't it?"),
            vec!["it's", "a", "well-known", "fact", "isn't", "it"]
        );
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        assert_eq!(tokenize("so so SO good"), vec!["so", "so", "so", "good"]);
    }

    #[test]
    fn test_digits_kept_and_non_ascii_letters_split() {
        assert_eq!(tokenize("Room 101"), vec!["room", "101"]);
        // Curly apostrophes and accented letters are outside the kept set
        assert_eq!(tokenize("it’s café"), vec!["it", "s", "caf"]);
    }
}
