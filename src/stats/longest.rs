//! Longest token.

use crate::analysis::token::Token;
use crate::error::{Result, WordStatsError};

/// The longest token in the sequence.
///
/// Every token takes part, letters and digits alike. On equal lengths the
/// token seen first is kept. Fails with `EmptyResult` on an empty sequence.
pub fn longest<I>(tokens: I) -> Result<Token>
where
    I: IntoIterator<Item = Token>,
{
    tokens
        .into_iter()
        .reduce(|best, token| if token.len() > best.len() { token } else { best })
        .ok_or_else(|| WordStatsError::empty_result("no longest word found"))
}
