//! Integration tests for word statistics over files on disk.

use std::collections::BTreeSet;
use std::io::Write;

use regex::Regex;
use tempfile::NamedTempFile;

use wordstats::analysis::tokenizer::tokenize;
use wordstats::error::Result;
use wordstats::prelude::*;
use wordstats::stats::{count, count_length3, frequency_map, group_by_length};

fn text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_example_text() -> Result<()> {
    let file = text_file("The cat sat.\nA 42 cat ran\n");
    let stats = WordStats::open(file.path());

    let tokens: Vec<String> = stats.tokens().map(String::from).collect();
    assert_eq!(tokens, ["The", "cat", "42", "cat", "ran"]);
    assert_eq!(stats.word_count(), 5);
    assert_eq!(stats.frequency_map().get("cat"), 2);
    assert_eq!(stats.three_letter_count(), 4);
    assert!((stats.average_length() - 14.0 / 5.0).abs() < 1e-12);

    let unique: Vec<String> = stats.unique_words()?.into_iter().map(String::from).collect();
    assert_eq!(unique, ["ran", "cat", "The", "42"]);

    Ok(())
}

#[test]
fn test_missing_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let stats = WordStats::open(dir.path().join("does-not-exist.txt"));

    assert_eq!(stats.word_count(), 0);
    assert_eq!(stats.three_letter_count(), 0);
    assert!(stats.average_length().is_nan());
    assert_eq!(stats.frequency_map().get("the"), 0);
    assert_eq!(stats.length_groups().count_of(4), 0);

    let mut out = Vec::new();
    assert_eq!(stats.print_top(&IndexOfScorer, "science", &mut out).unwrap(), 0);
    assert!(out.is_empty());

    assert!(stats.unique_words().unwrap_err().is_empty_result());
    assert!(stats.longest_word().unwrap_err().is_empty_result());
}

#[test]
fn test_every_token_matches_pattern() {
    let file = text_file(
        "Mixed: punctuation, tabs\tand  double spaces!\n\
         emoji \u{1F600} caf\u{e9} x86_64 ok 1989 A b CD\n",
    );
    let stats = WordStats::open(file.path());
    let pattern = Regex::new(r"^[A-Za-z0-9]{2,}$").unwrap();

    let tokens: Vec<Token> = stats.tokens().collect();
    assert!(tokens.iter().all(|token| pattern.is_match(token)));

    let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
    assert_eq!(words, ["double", "emoji", "ok", "1989", "CD"]);
}

#[test]
fn test_statistics_are_consistent() -> Result<()> {
    let file = text_file(
        "It was the best of times it was the worst of times\n\
         it was the age of wisdom it was the age of foolishness\n\
         In 1859 the novel appeared\n",
    );
    let stats = WordStats::open(file.path());

    let total = stats.word_count();
    let frequencies = stats.frequency_map();
    assert_eq!(frequencies.total(), total);
    assert_eq!(frequencies.get("was"), 4);
    assert_eq!(frequencies.get("It"), 1);

    let groups = stats.length_groups();
    for (len, group) in groups.iter() {
        assert!(group.iter().all(|token| token.len() == len));
    }
    let union: BTreeSet<Token> = groups.iter().flat_map(|(_, g)| g.iter().cloned()).collect();
    let unique: BTreeSet<Token> = stats.unique_words()?.into_iter().collect();
    assert_eq!(union, unique);
    assert_eq!(frequencies.len(), unique.len());

    assert_eq!(stats.longest_word()?, "foolishness");
    Ok(())
}

#[test]
fn test_parallel_engine_matches_free_functions() -> Result<()> {
    let mut contents = String::new();
    for i in 0..2_000 {
        contents.push_str(&format!("line {i} has some words and abc{} end.\n", i % 13));
    }
    let file = text_file(&contents);

    let stats = WordStats::with_config(
        FileSource::new(file.path()),
        StatsConfig::new().with_parallel(true).with_thread_pool_size(4),
    )?;
    let lines = || FileSource::new(file.path()).lines();

    assert_eq!(stats.word_count(), count(tokenize(lines())));
    assert_eq!(stats.three_letter_count(), count_length3(tokenize(lines())));
    assert_eq!(stats.frequency_map(), frequency_map(tokenize(lines())));
    assert_eq!(stats.length_groups(), group_by_length(tokenize(lines())));
    assert_eq!(stats.frequency_map().get("abc7"), 154);

    Ok(())
}
