//! Word count.

use super::fold::{Reduction, fold_sequential};
use crate::analysis::token::Token;

/// Counts every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCount;

impl Reduction for WordCount {
    type Acc = u64;

    fn identity(&self) -> u64 {
        0
    }

    fn accumulate(&self, acc: u64, _token: Token) -> u64 {
        acc + 1
    }

    fn combine(&self, left: u64, right: u64) -> u64 {
        left + right
    }
}

/// Number of tokens in the sequence. An empty sequence counts as 0.
pub fn count<I>(tokens: I) -> u64
where
    I: IntoIterator<Item = Token>,
{
    fold_sequential(&WordCount, tokens)
}
