//! Ranked occurrence search.
//!
//! Every token of a text is scored against a target string with a
//! [`scorer::Scorer`], and the highest-scoring tokens are reported as
//! `<score>:<<token>>` lines.

pub mod collector;
pub mod ranked;
pub mod scorer;

pub use collector::TopScoredCollector;
pub use ranked::{DEFAULT_TOP_N, ScoredLine, print_top, top_scored, write_scored};
pub use scorer::{IndexOfScorer, OccurrenceScorer, Scorer};
