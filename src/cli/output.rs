//! Output formatting for the wordstats report.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{OutputFormat, ScorerKind, WordStatsArgs};
use crate::error::Result;
use crate::search::{ScoredLine, write_scored};

/// Answers to every report question.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub file: String,
    pub word_count: u64,
    pub count_secs: f64,
    pub unique_words: usize,
    pub longest_word: String,
    pub three_letter_words: u64,
    pub average_length: f64,
    pub word: String,
    pub word_occurrences: u64,
    pub length: usize,
    pub unique_words_of_length: usize,
    pub search: String,
    pub scorer: ScorerKind,
    pub top_matches: Vec<ScoredLine>,
}

/// Output a report in the format selected on the command line.
pub fn output_report(report: &Report, args: &WordStatsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.output_format {
        OutputFormat::Human => render_human(report, &mut out)?,
        OutputFormat::Json => render_json(report, args.pretty, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Write the report as question lines, each followed by its answer.
pub fn render_human<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    let file = &report.file;

    writeln!(out, "Q1. How many words are in {file}?")?;
    writeln!(out, "Count words took: {:.3} secs.", report.count_secs)?;
    writeln!(out, "{}", format_count(report.word_count))?;

    writeln!(out, "Q3. How many unique words are in {file}?")?;
    writeln!(out, "{}", format_count(report.unique_words as u64))?;

    writeln!(out, "Q4. What is the longest digit number in {file}?")?;
    writeln!(out, "{}", report.longest_word)?;

    writeln!(
        out,
        "Q5. How many three-letter words (case-insensitive) (e.g. \"has\", \"How\", \"wHy\", \"THE\", \"123\", etc.) are in {file}?"
    )?;
    writeln!(out, "{}", format_count(report.three_letter_words))?;

    writeln!(out, "Q6. What is the average word length in {file}?")?;
    writeln!(out, "{}", format_average(report.average_length))?;

    writeln!(
        out,
        "Q7. How many times does the word \"{}\" (case-sensitive) occur in {file}?",
        report.word
    )?;
    writeln!(out, "{}", format_count(report.word_occurrences))?;

    writeln!(
        out,
        "Q8. How many unique words with the length of {} characters are in {file}?",
        report.length
    )?;
    writeln!(out, "{}", format_count(report.unique_words_of_length as u64))?;

    match report.scorer {
        ScorerKind::IndexOf => writeln!(
            out,
            "Q9. What is the first index number when searching for the word \"{}\" (case-sensitive) in {file}?",
            report.search
        )?,
        ScorerKind::Occurrences => writeln!(
            out,
            "Q9. How many times does \"{}\" (case-sensitive) occur within each word of {file}?",
            report.search
        )?,
    }
    write_scored(&report.top_matches, out)
}

/// Write the report as one JSON object.
pub fn render_json<W: Write>(report: &Report, pretty: bool, out: &mut W) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, report)?;
    } else {
        serde_json::to_writer(&mut *out, report)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Format an integer with comma-grouped thousands (`12,345`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format an average with two decimals (`4.27`).
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}
