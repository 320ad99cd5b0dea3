//! Token type for word statistics.
//!
//! A [`Token`] is an immutable word of at least two ASCII letters or digits.
//! Tokens are only ever produced by validating text against [`WORD_PATTERN`],
//! so every value of this type satisfies the pattern.
//!
//! # Examples
//!
//! ```
//! use wordstats::analysis::token::Token;
//!
//! let token = Token::parse("Rust2024").unwrap();
//! assert_eq!(token.as_str(), "Rust2024");
//! assert_eq!(token.len(), 8);
//!
//! assert!(Token::parse("a").is_none());
//! assert!(Token::parse("things,").is_none());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Result, WordStatsError};

/// A lazily produced, forward-only sequence of tokens.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + Send + 'a>;

/// Anchored pattern every token must match in full.
pub const WORD_PATTERN: &str = r"^[A-Za-z0-9]{2,}$";

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("Word pattern should be valid"));

/// Check whether `text` is a word in full (no trimming is applied).
pub fn is_word(text: &str) -> bool {
    WORD_REGEX.is_match(text)
}

/// A single word extracted from the source text.
///
/// Case is preserved. Equality, hashing and ordering are those of the
/// underlying string, so comparisons are case-sensitive and ordering is
/// byte-wise (`"Zebra" < "apple"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Validate `text` and wrap it, returning `None` when it is not a word.
    pub fn parse(text: &str) -> Option<Self> {
        is_word(text).then(|| Token(text.to_owned()))
    }

    /// Validate `text` and wrap it, failing with an analysis error.
    pub fn new<S: Into<String>>(text: S) -> Result<Self> {
        let text = text.into();
        if is_word(&text) {
            Ok(Token(text))
        } else {
            Err(WordStatsError::analysis(format!(
                "'{text}' does not match {WORD_PATTERN}"
            )))
        }
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, which equals the length in characters for ASCII words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_and_digits() {
        for word in ["The", "tHe", "1989", "ab", "x86", "ABCdef0123"] {
            assert!(is_word(word), "{word} should be a word");
        }
    }

    #[test]
    fn test_rejects_partial_matches() {
        for text in ["", "a", "7", "89_", "things,", "sat.", "don't", "a b", "über", "[x]"] {
            assert!(!is_word(text), "{text:?} should not be a word");
        }
    }

    #[test]
    fn test_new_reports_invalid_text() {
        let err = Token::new("x").unwrap_err();
        assert!(err.to_string().contains("does not match"));

        let token = Token::new(String::from("hello")).unwrap();
        assert_eq!(token, "hello");
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let upper = Token::parse("Zebra").unwrap();
        let lower = Token::parse("apple").unwrap();
        assert!(upper < lower);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let token = Token::parse("word").unwrap();
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"word\"");
    }
}
