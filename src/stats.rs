//! Aggregations over a token sequence.
//!
//! Each aggregator consumes one traversal of tokens and produces one
//! statistic. Aggregators that are associative are expressed as a
//! [`fold::Reduction`] so they can run either sequentially or data-parallel
//! through rayon with the same definition.

pub mod count;
pub mod fold;
pub mod frequency;
pub mod length;
pub mod length_groups;
pub mod longest;
pub mod unique;

pub use count::{WordCount, count};
pub use fold::{Execution, Reduction, fold, fold_parallel, fold_sequential};
pub use frequency::{Frequencies, FrequencyMap, frequency_map};
pub use length::{LengthTotals, ThreeLetterCount, average_length, count_length3};
pub use length_groups::{LengthGrouping, LengthGroups, group_by_length};
pub use longest::longest;
pub use unique::unique_sorted;
