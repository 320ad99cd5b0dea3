//! Distinct tokens grouped by length.

use ahash::{AHashMap, AHashSet};

use super::fold::{Reduction, fold_sequential};
use crate::analysis::token::Token;

/// Mapping from token length to the set of distinct tokens of that length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthGroups {
    groups: AHashMap<usize, AHashSet<Token>>,
}

impl LengthGroups {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `token` into the group for its length.
    pub fn insert(&mut self, token: Token) {
        self.groups.entry(token.len()).or_default().insert(token);
    }

    /// Distinct tokens of length `len`, if any occurred.
    pub fn get(&self, len: usize) -> Option<&AHashSet<Token>> {
        self.groups.get(&len)
    }

    /// Number of distinct tokens of length `len`; zero when none occurred.
    pub fn count_of(&self, len: usize) -> usize {
        self.groups.get(&len).map_or(0, |group| group.len())
    }

    /// All lengths that have at least one token, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.groups.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Number of distinct lengths.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no token was grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over `(length, tokens)` groups in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &AHashSet<Token>)> {
        self.groups.iter().map(|(&len, group)| (len, group))
    }

    /// Merge another grouping into this one.
    pub fn merge(&mut self, other: LengthGroups) {
        for (len, group) in other.groups {
            self.groups.entry(len).or_default().extend(group);
        }
    }
}

/// Builds a [`LengthGroups`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthGrouping;

impl Reduction for LengthGrouping {
    type Acc = LengthGroups;

    fn identity(&self) -> LengthGroups {
        LengthGroups::new()
    }

    fn accumulate(&self, mut acc: LengthGroups, token: Token) -> LengthGroups {
        acc.insert(token);
        acc
    }

    fn combine(&self, mut left: LengthGroups, right: LengthGroups) -> LengthGroups {
        left.merge(right);
        left
    }
}

/// Group distinct tokens by their length.
pub fn group_by_length<I>(tokens: I) -> LengthGroups
where
    I: IntoIterator<Item = Token>,
{
    fold_sequential(&LengthGrouping, tokens)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::stats::fold::fold_parallel;
    use crate::stats::fold::tests::tokens;

    #[test]
    fn test_group_by_length() {
        let groups = group_by_length(tokens(&["the", "cat", "the", "tree", "Tree", "at"]));

        assert_eq!(groups.count_of(2), 1);
        assert_eq!(groups.count_of(3), 2);
        assert_eq!(groups.count_of(4), 2);
        assert_eq!(groups.lengths(), [2, 3, 4]);
        assert!(groups.get(3).unwrap().contains("cat"));
    }

    #[test]
    fn test_missing_length_is_empty() {
        let groups = group_by_length(tokens(&["abc"]));
        assert!(groups.get(4).is_none());
        assert_eq!(groups.count_of(4), 0);
    }

    #[test]
    fn test_keys_match_lengths_and_union_is_unique_set() {
        let words = tokens(&["alpha", "beta", "gamma", "beta", "pi", "mu", "pi"]);
        let groups = group_by_length(words.clone());

        for (len, group) in groups.iter() {
            assert!(group.iter().all(|token| token.len() == len));
        }

        let union: BTreeSet<&Token> = groups.iter().flat_map(|(_, group)| group.iter()).collect();
        let unique: BTreeSet<&Token> = words.iter().collect();
        assert_eq!(union, unique);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words: Vec<Token> = (0..3_000)
            .map(|i| Token::new(format!("k{}", i % 511)).unwrap())
            .collect();

        assert_eq!(
            fold_parallel(&LengthGrouping, words.clone()),
            group_by_length(words)
        );
    }
}
