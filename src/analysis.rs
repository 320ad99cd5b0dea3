//! Text analysis module for wordstats.
//!
//! This module provides the word tokenization that every statistic is built on.

pub mod token;
pub mod tokenizer;
