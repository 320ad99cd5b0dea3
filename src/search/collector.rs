//! Collector keeping the best-scoring entries of a ranked search.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::ranked::ScoredLine;

/// A collector that keeps the top N entries by score.
///
/// Among equal scores the entry collected first ranks higher, so the output
/// matches a stable descending sort of everything collected, truncated to N.
#[derive(Debug)]
pub struct TopScoredCollector {
    /// Maximum number of entries to keep.
    max_entries: usize,
    /// Kept entries; the root is the weakest one.
    heap: BinaryHeap<Reverse<Ranked>>,
    /// Total number of entries offered.
    total: u64,
}

#[derive(Debug)]
struct Ranked {
    score: i64,
    seq: u64,
    text: String,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    // Greater means ranked higher: higher score, then earlier arrival.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl TopScoredCollector {
    /// Create a collector keeping at most `max_entries` entries.
    pub fn new(max_entries: usize) -> Self {
        TopScoredCollector {
            max_entries,
            heap: BinaryHeap::with_capacity(max_entries.min(1024) + 1),
            total: 0,
        }
    }

    /// Maximum number of entries kept.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Number of entries offered so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Offer an entry.
    pub fn collect<S: Into<String>>(&mut self, score: i64, text: S) {
        let seq = self.total;
        self.total += 1;

        if self.max_entries == 0 {
            return;
        }

        if self.heap.len() == self.max_entries {
            // A later entry never beats an equal score.
            match self.heap.peek() {
                Some(Reverse(weakest)) if score <= weakest.score => return,
                _ => {}
            }
            self.heap.pop();
        }

        self.heap.push(Reverse(Ranked {
            score,
            seq,
            text: text.into(),
        }));
    }

    /// Kept entries, highest score first.
    pub fn into_sorted(self) -> Vec<ScoredLine> {
        // Ascending order of `Reverse<Ranked>` is descending rank.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| ScoredLine::new(ranked.score, ranked.text))
            .collect()
    }
}
