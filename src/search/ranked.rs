//! Top-N ranked search over the words of a text.

use std::fmt;
use std::io::{self, Write};

use log::debug;
use serde::{Deserialize, Serialize};

use super::collector::TopScoredCollector;
use super::scorer::Scorer;
use crate::analysis::tokenizer::tokenize;

/// Number of entries reported by default.
pub const DEFAULT_TOP_N: usize = 20;

/// A score paired with the text it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLine {
    /// Score assigned by the scorer.
    pub score: i64,
    /// Scored text.
    pub text: String,
}

impl ScoredLine {
    /// Create a new scored line.
    pub fn new<S: Into<String>>(score: i64, text: S) -> Self {
        ScoredLine {
            score,
            text: text.into(),
        }
    }
}

impl fmt::Display for ScoredLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:<{}>", self.score, self.text)
    }
}

/// Score every word of `lines` against `target` and keep the best `limit`,
/// highest score first.
///
/// The lines are tokenized exactly like every other statistic, so the entries
/// are individual words rather than whole lines.
pub fn top_scored<S, I>(scorer: &S, lines: I, target: &str, limit: usize) -> Vec<ScoredLine>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = String>,
{
    let mut collector = TopScoredCollector::new(limit);
    for token in tokenize(lines) {
        let score = scorer.score(token.as_str(), target);
        collector.collect(score, token.into_string());
    }

    debug!(
        "Ranked {} words against '{}' with {} scorer",
        collector.total(),
        target,
        scorer.name()
    );
    collector.into_sorted()
}

/// Write one `<score>:<<text>>` line per entry.
pub fn write_scored<W: Write>(entries: &[ScoredLine], out: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// Rank the words of `lines` against `target` and write the top `limit`.
///
/// Returns the number of lines written. Only failures of `out` are errors; an
/// unreadable source simply yields no lines.
pub fn print_top<S, I, W>(
    scorer: &S,
    lines: I,
    target: &str,
    limit: usize,
    out: &mut W,
) -> io::Result<usize>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = String>,
    W: Write,
{
    let entries = top_scored(scorer, lines, target, limit);
    write_scored(&entries, out)?;
    Ok(entries.len())
}
