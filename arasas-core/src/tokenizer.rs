//! Simple word tokenizer
//!
//! Punctuation and symbol characters become single-character tokens; runs
//! of letters, combining marks and digits become word tokens; whitespace
//! only separates.

use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[\p{P}\p{S}]|[\p{L}\p{M}\p{N}]+").expect("word pattern is valid")
    })
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("digits pattern is valid"))
}

fn punctuation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{P}\p{S}]+$").expect("punctuation pattern is valid"))
}

/// Split a sentence into word and punctuation tokens
pub fn simple_word_tokenize(sentence: &str) -> Vec<String> {
    word_pattern()
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Whether `form` consists only of decimal digits (any script)
pub fn is_digits(form: &str) -> bool {
    digits_pattern().is_match(form)
}

/// Whether `form` consists only of punctuation or symbol characters
pub fn is_punctuation(form: &str) -> bool {
    punctuation_pattern().is_match(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_split_off() {
        assert_eq!(
            simple_word_tokenize("Hello, world!"),
            vec!["Hello", ",", "world", "!"]
        );
    }

    #[test]
    fn test_arabic_with_diacritics_stays_whole() {
        assert_eq!(
            simple_word_tokenize("قَرَأَ الوَلَدُ الكِتَابَ."),
            vec!["قَرَأَ", "الوَلَدُ", "الكِتَابَ", "."]
        );
    }

    #[test]
    fn test_arabic_comma_and_digits() {
        assert_eq!(
            simple_word_tokenize("في عام 2024، سافرنا"),
            vec!["في", "عام", "2024", "،", "سافرنا"]
        );
    }

    #[test]
    fn test_repeated_punctuation_is_separate() {
        assert_eq!(simple_word_tokenize("?!"), vec!["?", "!"]);
    }

    #[test]
    fn test_whitespace_only() {
        assert!(simple_word_tokenize(" \t ").is_empty());
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("123"));
        assert!(is_digits("١٢٣"));
        assert!(!is_digits("12a"));
        assert!(!is_digits(""));
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("،"));
        assert!(is_punctuation("$"));
        assert!(!is_punctuation("a."));
    }
}
