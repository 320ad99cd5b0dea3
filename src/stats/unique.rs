//! Unique words in descending order.

use std::collections::BTreeSet;

use crate::analysis::token::Token;
use crate::error::{Result, WordStatsError};

/// Distinct tokens sorted in descending byte order.
///
/// Comparison is case-sensitive, so `"apple"` sorts before `"Zebra"` in the
/// output. Fails with `EmptyResult` when there are no tokens at all.
pub fn unique_sorted<I>(tokens: I) -> Result<Vec<Token>>
where
    I: IntoIterator<Item = Token>,
{
    let unique: BTreeSet<Token> = tokens.into_iter().collect();
    if unique.is_empty() {
        return Err(WordStatsError::empty_result("no unique words found"));
    }

    Ok(unique.into_iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fold::tests::tokens;

    #[test]
    fn test_unique_sorted() {
        let words = unique_sorted(tokens(&["cat", "Zebra", "apple", "cat", "42"])).unwrap();
        assert_eq!(words, ["cat", "apple", "Zebra", "42"]);
    }

    #[test]
    fn test_strictly_descending() {
        let words = unique_sorted(tokens(&["bb", "aa", "bb", "cc", "aa", "AA"])).unwrap();
        assert!(words.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn test_empty_is_error() {
        let err = unique_sorted(Vec::new()).unwrap_err();
        assert!(err.is_empty_result());
        assert_eq!(err.to_string(), "Empty result: no unique words found");
    }
}
