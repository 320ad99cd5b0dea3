//! Single-pass reductions over token sequences.
//!
//! A [`Reduction`] describes an aggregation as an identity, a per-token
//! accumulation step and an associative combine step. The sequential driver
//! only uses the first two; the parallel driver folds partial accumulators on
//! rayon workers and merges them with `combine`.
//!
//! # Examples
//!
//! ```
//! use wordstats::analysis::tokenizer::tokenize;
//! use wordstats::stats::{Execution, ThreeLetterCount, fold};
//!
//! let lines = vec!["the cat sat on the mat".to_string()];
//! let sequential = fold(&ThreeLetterCount, tokenize(lines.clone()), Execution::Sequential);
//! let parallel = fold(&ThreeLetterCount, tokenize(lines), Execution::Parallel);
//! assert_eq!(sequential, 5);
//! assert_eq!(parallel, 5);
//! ```

use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::analysis::token::Token;

/// An associative aggregation over tokens.
///
/// `combine` must be associative and `identity` must be its neutral element,
/// and accumulation order must not matter, for the parallel driver to agree
/// with the sequential one.
pub trait Reduction: Sync {
    /// Accumulator type.
    type Acc: Send;

    /// The neutral accumulator.
    fn identity(&self) -> Self::Acc;

    /// Fold one token into the accumulator.
    fn accumulate(&self, acc: Self::Acc, token: Token) -> Self::Acc;

    /// Merge two partial accumulators.
    fn combine(&self, left: Self::Acc, right: Self::Acc) -> Self::Acc;
}

/// How a reduction is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Fold on the calling thread.
    #[default]
    Sequential,
    /// Fold partial accumulators on the current rayon pool, then combine.
    Parallel,
}

/// Fold `tokens` on the calling thread.
pub fn fold_sequential<R, I>(reduction: &R, tokens: I) -> R::Acc
where
    R: Reduction + ?Sized,
    I: IntoIterator<Item = Token>,
{
    tokens
        .into_iter()
        .fold(reduction.identity(), |acc, token| {
            reduction.accumulate(acc, token)
        })
}

/// Fold `tokens` on the current rayon pool.
///
/// The sequence is bridged into rayon lazily, so it is still traversed exactly
/// once and never collected.
pub fn fold_parallel<R, I>(reduction: &R, tokens: I) -> R::Acc
where
    R: Reduction + ?Sized,
    I: IntoIterator<Item = Token>,
    I::IntoIter: Send,
{
    tokens
        .into_iter()
        .par_bridge()
        .fold(
            || reduction.identity(),
            |acc, token| reduction.accumulate(acc, token),
        )
        .reduce(
            || reduction.identity(),
            |left, right| reduction.combine(left, right),
        )
}

/// Fold `tokens` with the given execution mode.
pub fn fold<R, I>(reduction: &R, tokens: I, execution: Execution) -> R::Acc
where
    R: Reduction + ?Sized,
    I: IntoIterator<Item = Token>,
    I::IntoIter: Send,
{
    match execution {
        Execution::Sequential => fold_sequential(reduction, tokens),
        Execution::Parallel => fold_parallel(reduction, tokens),
    }
}
