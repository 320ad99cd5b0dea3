//! Command line argument parsing for the wordstats CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::search::{IndexOfScorer, OccurrenceScorer, Scorer};

/// wordstats - Word statistics over a plain-text file
#[derive(Parser, Debug, Clone)]
#[command(name = "wordstats")]
#[command(about = "Word statistics over a plain-text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordStatsArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file; flags below override its values
    #[arg(long, value_name = "CONFIG_FILE", env = "WORDSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Run folds data-parallel
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for parallel folds
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Word whose occurrences are counted (case-sensitive)
    #[arg(long, default_value = "the")]
    pub word: String,

    /// Length whose distinct words are counted
    #[arg(long, default_value = "4")]
    pub length: usize,

    /// Target string for the ranked search (case-sensitive)
    #[arg(long, default_value = "science")]
    pub search: String,

    /// Number of ranked search results
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Scoring function for the ranked search
    #[arg(long, default_value = "index-of")]
    pub scorer: ScorerKind,
}

impl WordStatsArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Question and answer lines
    Human,
    /// A single JSON report object
    Json,
}

/// Scoring functions available from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScorerKind {
    /// Index of the first occurrence, -1 when absent
    IndexOf,
    /// Number of non-overlapping occurrences
    Occurrences,
}

impl ScorerKind {
    /// The scorer this kind names.
    pub fn scorer(self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::IndexOf => Box::new(IndexOfScorer),
            ScorerKind::Occurrences => Box::new(OccurrenceScorer),
        }
    }
}
