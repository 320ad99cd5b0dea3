//! Length-based folds: three-letter word count and average word length.
//!
//! Both statistics are computed by a single [`Reduction`] over the token
//! sequence. Neither builds an intermediate collection or makes a second pass.

use serde::{Deserialize, Serialize};

use super::fold::{Reduction, fold_sequential};
use crate::analysis::token::Token;

/// Counts tokens of exactly three characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeLetterCount;

impl Reduction for ThreeLetterCount {
    type Acc = u64;

    fn identity(&self) -> u64 {
        0
    }

    fn accumulate(&self, acc: u64, token: Token) -> u64 {
        if token.len() == 3 { acc + 1 } else { acc }
    }

    fn combine(&self, left: u64, right: u64) -> u64 {
        left + right
    }
}

/// Running totals for the average word length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthTotals {
    /// Sum of all token lengths.
    pub total_length: u64,
    /// Number of tokens seen.
    pub total_count: u64,
}

impl LengthTotals {
    /// Average length. `0 / 0` is NaN.
    pub fn average(&self) -> f64 {
        self.total_length as f64 / self.total_count as f64
    }
}

impl Reduction for LengthTotals {
    type Acc = LengthTotals;

    fn identity(&self) -> LengthTotals {
        LengthTotals::default()
    }

    fn accumulate(&self, acc: LengthTotals, token: Token) -> LengthTotals {
        LengthTotals {
            total_length: acc.total_length + token.len() as u64,
            total_count: acc.total_count + 1,
        }
    }

    fn combine(&self, left: LengthTotals, right: LengthTotals) -> LengthTotals {
        LengthTotals {
            total_length: left.total_length + right.total_length,
            total_count: left.total_count + right.total_count,
        }
    }
}

/// Number of three-character tokens.
pub fn count_length3<I>(tokens: I) -> u64
where
    I: IntoIterator<Item = Token>,
{
    fold_sequential(&ThreeLetterCount, tokens)
}

/// Average token length; NaN for an empty sequence.
pub fn average_length<I>(tokens: I) -> f64
where
    I: IntoIterator<Item = Token>,
{
    fold_sequential(&LengthTotals::default(), tokens).average()
}
