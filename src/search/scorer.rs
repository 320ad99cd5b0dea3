//! Scoring functions for ranked search.

/// Scores a token against a target string.
///
/// Any `Fn(&str, &str) -> i64` closure is a scorer:
///
/// ```
/// use wordstats::search::Scorer;
///
/// let by_length = |text: &str, _target: &str| text.len() as i64;
/// assert_eq!(by_length.score("four", "x"), 4);
/// ```
pub trait Scorer: Send + Sync {
    /// Score `text` against `target`. Higher ranks first.
    fn score(&self, text: &str, target: &str) -> i64;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> i64 + Send + Sync,
{
    fn score(&self, text: &str, target: &str) -> i64 {
        self(text, target)
    }
}

/// Position of the first occurrence of the target, or `-1` when absent.
///
/// Tokens are ASCII, so the byte index equals the character index. An empty
/// target occurs at index 0 of every token.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOfScorer;

impl Scorer for IndexOfScorer {
    fn score(&self, text: &str, target: &str) -> i64 {
        text.find(target).map_or(-1, |index| index as i64)
    }

    fn name(&self) -> &'static str {
        "index-of"
    }
}

/// Number of non-overlapping occurrences of the target. An empty target
/// scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccurrenceScorer;

impl Scorer for OccurrenceScorer {
    fn score(&self, text: &str, target: &str) -> i64 {
        if target.is_empty() {
            return 0;
        }
        text.matches(target).count() as i64
    }

    fn name(&self) -> &'static str {
        "occurrences"
    }
}
