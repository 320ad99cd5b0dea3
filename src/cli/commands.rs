//! Command implementations for the wordstats CLI.

use std::path::Path;

use log::info;

use crate::cli::args::{ScorerKind, WordStatsArgs};
use crate::cli::output::{Report, output_report};
use crate::config::StatsConfig;
use crate::engine::WordStats;
use crate::error::Result;
use crate::source::{FileSource, LineSource};

/// Parameters of the report questions that take an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// Word whose occurrences are counted.
    pub word: String,
    /// Length whose distinct words are counted.
    pub length: usize,
    /// Target of the ranked search.
    pub search: String,
    /// Scoring function of the ranked search.
    pub scorer: ScorerKind,
}

impl Default for ReportQuery {
    fn default() -> Self {
        ReportQuery {
            word: "the".to_string(),
            length: 4,
            search: "science".to_string(),
            scorer: ScorerKind::IndexOf,
        }
    }
}

impl From<&WordStatsArgs> for ReportQuery {
    fn from(args: &WordStatsArgs) -> Self {
        ReportQuery {
            word: args.word.clone(),
            length: args.length,
            search: args.search.clone(),
            scorer: args.scorer,
        }
    }
}

/// Execute the CLI: compute the report for the given file and print it.
pub fn execute_command(args: WordStatsArgs) -> Result<()> {
    let config = build_config(&args)?;
    let stats = WordStats::with_config(FileSource::new(&args.file), config)?;
    let report = build_report(&stats, &ReportQuery::from(&args), &args.file)?;

    output_report(&report, &args)
}

/// Resolve the configuration: optional config file first, then flags.
pub fn build_config(args: &WordStatsArgs) -> Result<StatsConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            StatsConfig::from_json_file(path)?
        }
        None => StatsConfig::default(),
    };

    if args.parallel {
        config.parallel = true;
    }
    if let Some(threads) = args.threads {
        config.thread_pool_size = Some(threads);
    }
    if let Some(top) = args.top {
        config.top_n = top;
    }

    config.validate()?;
    Ok(config)
}

/// Answer every report question. Each answer re-reads the source.
///
/// Stops at the first question that has no answer (no words at all).
pub fn build_report<S: LineSource>(
    stats: &WordStats<S>,
    query: &ReportQuery,
    file: &Path,
) -> Result<Report> {
    let (word_count, elapsed) = stats.word_count_timed();
    let unique_words = stats.unique_words()?.len();
    let longest_word = stats.longest_word()?.into_string();
    let three_letter_words = stats.three_letter_count();
    let average_length = stats.average_length();
    let word_occurrences = stats.frequency_map().get(&query.word);
    let unique_words_of_length = stats.length_groups().count_of(query.length);
    let top_matches = stats.top_matches(query.scorer.scorer().as_ref(), &query.search);

    Ok(Report {
        file: file.display().to_string(),
        word_count,
        count_secs: elapsed.as_secs_f64(),
        unique_words,
        longest_word,
        three_letter_words,
        average_length,
        word: query.word.clone(),
        word_occurrences,
        length: query.length,
        unique_words_of_length,
        search: query.search.clone(),
        scorer: query.scorer,
        top_matches,
    })
}
