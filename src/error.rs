//! Error types for the wordstats library.
//!
//! All errors are represented by the [`WordStatsError`] enum. Two tiers exist in
//! practice: I/O failures, which the query layer logs and downgrades to empty
//! results, and [`WordStatsError::EmptyResult`], which is always returned to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use wordstats::error::{Result, WordStatsError};
//!
//! fn first_word(words: &[&str]) -> Result<String> {
//!     words
//!         .first()
//!         .map(|w| w.to_string())
//!         .ok_or_else(|| WordStatsError::empty_result("no words"))
//! }
//!
//! assert!(first_word(&[]).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordstats operations.
#[derive(Error, Debug)]
pub enum WordStatsError {
    /// I/O errors (opening or reading the source file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An operation that needs at least one token received none
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Analysis-related errors (invalid tokenizer patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Thread pool construction failures
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordStatsError.
pub type Result<T> = std::result::Result<T, WordStatsError>;

impl WordStatsError {
    /// Create a new empty result error.
    pub fn empty_result<S: Into<String>>(msg: S) -> Self {
        WordStatsError::EmptyResult(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordStatsError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordStatsError::InvalidConfig(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        WordStatsError::ThreadPool(msg.into())
    }

    /// Whether this error signals missing data rather than an I/O problem.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, WordStatsError::EmptyResult(_))
    }
}
