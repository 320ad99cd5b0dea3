//! Token frequency map.

use std::cmp::Reverse;

use ahash::AHashMap;

use super::fold::{Reduction, fold_sequential};
use crate::analysis::token::Token;

/// Mapping from token to occurrence count.
///
/// Lookups are by `&str`, and a token that never occurred reports a count of
/// zero instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: AHashMap<Token, u64>,
}

impl FrequencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    pub fn add(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Occurrences of `word`; zero when absent.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether `word` occurred at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no token was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the source sequence.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(token, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.counts.iter().map(|(token, &count)| (token, count))
    }

    /// The `n` most frequent tokens, highest count first, ties in ascending
    /// token order.
    pub fn most_common(&self, n: usize) -> Vec<(&Token, u64)> {
        let mut entries: Vec<(&Token, u64)> = self.iter().collect();
        entries.sort_unstable_by_key(|&(token, count)| (Reverse(count), token));
        entries.truncate(n);
        entries
    }

    /// Merge another map into this one by adding counts.
    pub fn merge(&mut self, other: FrequencyMap) {
        for (token, count) in other.counts {
            *self.counts.entry(token).or_insert(0) += count;
        }
    }
}

/// Builds a [`FrequencyMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Frequencies;

impl Reduction for Frequencies {
    type Acc = FrequencyMap;

    fn identity(&self) -> FrequencyMap {
        FrequencyMap::new()
    }

    fn accumulate(&self, mut acc: FrequencyMap, token: Token) -> FrequencyMap {
        acc.add(token);
        acc
    }

    fn combine(&self, left: FrequencyMap, right: FrequencyMap) -> FrequencyMap {
        let (mut larger, smaller) = if left.len() >= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        larger.merge(smaller);
        larger
    }
}

/// Count the occurrences of every token.
pub fn frequency_map<I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = Token>,
{
    fold_sequential(&Frequencies, tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::tokenize;
    use crate::stats::count::count;
    use crate::stats::fold::fold_parallel;
    use crate::stats::fold::tests::tokens;

    #[test]
    fn test_frequency_map() {
        let map = frequency_map(tokens(&["the", "cat", "the", "The", "the"]));

        assert_eq!(map.get("the"), 3);
        assert_eq!(map.get("The"), 1);
        assert_eq!(map.get("cat"), 1);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_absent_word_is_zero() {
        let map = frequency_map(tokens(&["present"]));
        assert_eq!(map.get("absent"), 0);
        assert!(!map.contains("absent"));
        assert_eq!(frequency_map(Vec::new()).get("anything"), 0);
    }

    #[test]
    fn test_counts_sum_to_word_count() {
        let lines = vec![
            "The cat sat.".to_string(),
            "A 42 cat ran".to_string(),
            "the end of the story".to_string(),
        ];
        let map = frequency_map(tokenize(lines.clone()));

        assert_eq!(map.total(), count(tokenize(lines)));
        assert_eq!(map.get("cat"), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words: Vec<Token> = (0..5_000)
            .map(|i| Token::new(format!("w{}", i % 97)).unwrap())
            .collect();

        assert_eq!(
            fold_parallel(&Frequencies, words.clone()),
            frequency_map(words)
        );
    }

    #[test]
    fn test_most_common() {
        let map = frequency_map(tokens(&["bb", "aa", "cc", "bb", "aa", "dd", "bb"]));
        let top: Vec<(&str, u64)> = map
            .most_common(3)
            .into_iter()
            .map(|(token, count)| (token.as_str(), count))
            .collect();

        assert_eq!(top, [("bb", 3), ("aa", 2), ("cc", 1)]);
    }
}
