//! # wordstats
//!
//! Descriptive statistics over the words of a plain-text file.
//!
//! ## Features
//!
//! - A single tokenization rule: space-separated words of two or more ASCII
//!   letters or digits
//! - Word count, unique words, longest word, three-letter word count and
//!   average word length
//! - Frequency and length-group maps
//! - Ranked substring search with pluggable scorers
//! - Sequential or rayon-parallel folds over the same definitions

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod search;
pub mod source;
pub mod stats;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::{Tokenizer, WordTokenizer, tokenize};
    pub use crate::config::StatsConfig;
    pub use crate::engine::WordStats;
    pub use crate::error::{Result, WordStatsError};
    pub use crate::search::{IndexOfScorer, OccurrenceScorer, ScoredLine, Scorer};
    pub use crate::source::{FileSource, LineSource, MemorySource};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
