//! # pensum-nicestring
//!
//! Classifies a string as *nice* when at least two of three independent
//! properties hold:
//!
//! 1. it contains none of the substrings `bu`, `ba`, `be`;
//! 2. it contains at least three vowels (`a`, `e`, `i`, `o`, `u`);
//! 3. it contains a doubled letter, two equal adjacent characters.
//!
//! The check is case-sensitive and works on `char` boundaries.
//!
//! ```rust
//! assert!(pensum_nicestring::is_nice("baaa"));
//! assert!(!pensum_nicestring::is_nice("aza"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

const FORBIDDEN_PAIRS: [&str; 3] = ["bu", "ba", "be"];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn lacks_forbidden_pairs(text: &str) -> bool {
    FORBIDDEN_PAIRS.iter().all(|pair| !text.contains(pair))
}

fn has_three_vowels(text: &str) -> bool {
    text.chars().filter(|c| VOWELS.contains(c)).count() >= 3
}

fn has_double_letter(text: &str) -> bool {
    text.chars().zip(text.chars().skip(1)).any(|(a, b)| a == b)
}

/// Returns true if `text` satisfies at least two of the three niceness
/// properties listed in the crate docs.
#[must_use]
pub fn is_nice(text: &str) -> bool {
    let satisfied = [
        lacks_forbidden_pairs(text),
        has_three_vowels(text),
        has_double_letter(text),
    ]
    .into_iter()
    .filter(|held| *held)
    .count();
    satisfied >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_properties_suffice() {
        // No forbidden pair and a double letter, but no vowels at all.
        assert!(is_nice("nn"));
        // Three vowels and a double letter outweigh the `ba` substring.
        assert!(is_nice("baaa"));
    }

    #[test]
    fn test_one_property_is_not_enough() {
        // Only the forbidden-pair property holds.
        assert!(!is_nice("aza"));
        assert!(!is_nice(""));
        // Three vowels alone, with `ba` present and no double letter.
        assert!(!is_nice("abaca"));
        // A double letter alone, with `be` present and two vowels.
        assert!(!is_nice("bee"));
    }

    #[test]
    fn test_all_three_properties() {
        assert!(is_nice("aaab"));
    }

    #[test]
    fn test_forbidden_pairs() {
        assert!(!is_nice("bua"));
        assert!(!is_nice("ebe"));
        assert!(!is_nice("bac"));
    }

    #[test]
    fn test_case_sensitive() {
        // Uppercase vowels do not count, uppercase `BA` is not forbidden.
        assert!(!is_nice("AEIOU"));
        assert!(is_nice("aeiou"));
        assert!(is_nice("BAAA"));
    }
}
