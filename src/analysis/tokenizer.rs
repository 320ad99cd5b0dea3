//! Tokenizer implementations for word extraction.
//!
//! Tokenizers turn a line of text into a stream of [`Token`]s. Every query in
//! this crate goes through [`word::WordTokenizer`], which splits on the single
//! space character and keeps only substrings that are words in full.
//!
//! # Examples
//!
//! ```
//! use wordstats::analysis::tokenizer::Tokenizer;
//! use wordstats::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("The cat sat.").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::{Token, TokenStream};

/// Trait for tokenizers that convert a single line into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared with the
/// rayon workers that drive parallel folds.
pub trait Tokenizer: Send + Sync {
    /// Tokenize one line of text (without its line terminator).
    fn tokenize<'a>(&'a self, line: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod word;

pub use word::{WordTokenizer, Words};

/// Tokenize a sequence of lines lazily with the default [`WordTokenizer`].
///
/// ```
/// use wordstats::analysis::tokenizer::tokenize;
///
/// let lines = vec!["The cat sat.".to_string(), "A 42 cat ran".to_string()];
/// let words: Vec<String> = tokenize(lines).map(String::from).collect();
/// assert_eq!(words, ["The", "cat", "42", "cat", "ran"]);
/// ```
pub fn tokenize<I>(lines: I) -> Words<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    WordTokenizer::new().words(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_preserves_order_across_lines() {
        let tokens: Vec<Token> = tokenize(lines(&["one two", "three four"])).collect();
        assert_eq!(tokens, ["one", "two", "three", "four"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize(Vec::new()).count(), 0);
        assert_eq!(tokenize(lines(&["", "", ""])).count(), 0);
    }
}
