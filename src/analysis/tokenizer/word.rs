//! Space-separated word tokenizer.

use std::vec;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};

/// The only character that separates words.
///
/// Tabs and other whitespace are not separators: `"a\tb"` is one substring and
/// is rejected as a whole. Two consecutive spaces produce an empty substring,
/// which is rejected as well.
pub const SEPARATOR: char = ' ';

/// A tokenizer that splits lines on [`SEPARATOR`] and keeps substrings that are
/// words in full.
///
/// Substrings with punctuation attached (`"sat."`) are dropped entirely rather
/// than trimmed.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Lazily tokenize a sequence of lines.
    ///
    /// Lines are pulled from `lines` only when the previous line has been
    /// exhausted, so no more than one line is held at a time.
    pub fn words<I>(&self, lines: I) -> Words<I::IntoIter>
    where
        I: IntoIterator<Item = String>,
    {
        Words::new(*self, lines)
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&'a self, line: &'a str) -> TokenStream<'a> {
        Box::new(line.split(SEPARATOR).filter_map(Token::parse))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Iterator over the words of a line sequence, produced by [`WordTokenizer::words`].
///
/// Each line is split by the wrapped [`Tokenizer`]; the tokens of the current
/// line are buffered until they have all been handed out.
#[derive(Debug)]
pub struct Words<I, T = WordTokenizer> {
    tokenizer: T,
    lines: I,
    pending: vec::IntoIter<Token>,
}

impl<I, T> Words<I, T>
where
    I: Iterator<Item = String>,
    T: Tokenizer,
{
    /// Tokenize `lines` with `tokenizer`.
    pub fn new<L>(tokenizer: T, lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Words {
            tokenizer,
            lines: lines.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }
}

impl<I, T> Iterator for Words<I, T>
where
    I: Iterator<Item = String>,
    T: Tokenizer,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(token);
            }

            let line = self.lines.next()?;
            self.pending = self
                .tokenizer
                .tokenize(&line)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}
