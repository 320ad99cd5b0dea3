//! Query engine binding a line source to the word statistics.
//!
//! [`WordStats`] answers every query by opening a fresh traversal of its
//! source and tokenizing it again. Nothing is cached between queries.
//!
//! # Examples
//!
//! ```
//! use wordstats::engine::WordStats;
//! use wordstats::source::MemorySource;
//!
//! let stats = WordStats::new(MemorySource::new(["The cat sat.", "A 42 cat ran"]));
//! assert_eq!(stats.word_count(), 5);
//! assert_eq!(stats.frequency_map().get("cat"), 2);
//! assert_eq!(stats.longest_word().unwrap(), "The");
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer, Words};
use crate::config::StatsConfig;
use crate::error::{Result, WordStatsError};
use crate::search::{ScoredLine, Scorer, top_scored, write_scored};
use crate::source::{FileSource, LineSource};
use crate::stats::{
    Execution, Frequencies, FrequencyMap, LengthGrouping, LengthGroups, LengthTotals, Reduction,
    ThreeLetterCount, WordCount, fold, longest, unique_sorted,
};

/// Word statistics over one text source.
#[derive(Debug)]
pub struct WordStats<S: LineSource = FileSource> {
    source: S,
    tokenizer: WordTokenizer,
    config: StatsConfig,
    pool: Option<ThreadPool>,
}

impl WordStats<FileSource> {
    /// Statistics over the file at `path` with the default configuration.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        WordStats::new(FileSource::new(path))
    }
}

impl<S: LineSource> WordStats<S> {
    /// Statistics over `source` with the default configuration.
    pub fn new(source: S) -> Self {
        WordStats {
            source,
            tokenizer: WordTokenizer::new(),
            config: StatsConfig::default(),
            pool: None,
        }
    }

    /// Statistics over `source` with a validated configuration.
    ///
    /// A dedicated rayon pool is built when the configuration asks for both
    /// parallel folds and a fixed pool size.
    pub fn with_config(source: S, config: StatsConfig) -> Result<Self> {
        config.validate()?;

        let pool = match (config.parallel, config.thread_pool_size) {
            (true, Some(threads)) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("wordstats-{i}"))
                    .build()
                    .map_err(|e| WordStatsError::thread_pool(e.to_string()))?,
            ),
            _ => None,
        };

        let tokenizer = WordTokenizer::new();
        debug!(
            "Word statistics over {} ({} tokenizer, {:?}, {} threads)",
            source.describe(),
            tokenizer.name(),
            config.execution(),
            if config.parallel { config.effective_threads() } else { 1 }
        );

        Ok(WordStats {
            source,
            tokenizer,
            config,
            pool,
        })
    }

    /// The line source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The active configuration.
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// A fresh token traversal of the source.
    pub fn tokens(&self) -> Words<S::Lines> {
        self.tokenizer.words(self.source.lines())
    }

    /// Run `reduction` over a fresh traversal with the configured execution.
    pub fn reduce<R: Reduction>(&self, reduction: &R) -> R::Acc {
        let execution = self.config.execution();
        match (&self.pool, execution) {
            (Some(pool), Execution::Parallel) => {
                pool.install(|| fold(reduction, self.tokens(), execution))
            }
            _ => fold(reduction, self.tokens(), execution),
        }
    }

    /// Number of words, with the elapsed tokenization and counting time.
    pub fn word_count_timed(&self) -> (u64, Duration) {
        let start = Instant::now();
        let count = self.reduce(&WordCount);
        let elapsed = start.elapsed();

        info!("Count words took: {:.3} secs.", elapsed.as_secs_f64());
        (count, elapsed)
    }

    /// Number of words. The elapsed time is logged at info level.
    pub fn word_count(&self) -> u64 {
        self.word_count_timed().0
    }

    /// Distinct words, descending. Fails with `EmptyResult` when there are none.
    pub fn unique_words(&self) -> Result<Vec<Token>> {
        unique_sorted(self.tokens())
    }

    /// Longest word, first seen on ties. Fails with `EmptyResult` when there
    /// are no words.
    pub fn longest_word(&self) -> Result<Token> {
        longest(self.tokens())
    }

    /// Number of three-character words.
    pub fn three_letter_count(&self) -> u64 {
        self.reduce(&ThreeLetterCount)
    }

    /// Total length and count of all words.
    pub fn length_totals(&self) -> LengthTotals {
        self.reduce(&LengthTotals::default())
    }

    /// Average word length; NaN when there are no words.
    pub fn average_length(&self) -> f64 {
        self.length_totals().average()
    }

    /// Occurrence count of every word.
    pub fn frequency_map(&self) -> FrequencyMap {
        self.reduce(&Frequencies)
    }

    /// Distinct words grouped by length.
    pub fn length_groups(&self) -> LengthGroups {
        self.reduce(&LengthGrouping)
    }

    /// The configured number of best-scoring words against `target`.
    pub fn top_matches<T: Scorer + ?Sized>(&self, scorer: &T, target: &str) -> Vec<ScoredLine> {
        top_scored(scorer, self.source.lines(), target, self.config.top_n)
    }

    /// Write the best-scoring words against `target` as `<score>:<<word>>`
    /// lines. Returns the number of lines written.
    pub fn print_top<T, W>(&self, scorer: &T, target: &str, out: &mut W) -> Result<usize>
    where
        T: Scorer + ?Sized,
        W: Write,
    {
        let entries = self.top_matches(scorer, target);
        write_scored(&entries, out)?;
        Ok(entries.len())
    }
}
