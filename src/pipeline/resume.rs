// src/pipeline/resume.rs

//! Resume discovery.
//!
//! Pairs letter-harvest files with their expected detail-harvest outputs by
//! filename convention. A letter file is unprocessed while no detail file
//! with the derived name exists. Pure over directory listings so the
//! contract is testable without a filesystem.

use std::sync::LazyLock;

use regex::Regex;

use crate::storage::{DIALECT_PREFIX, WORDS_PREFIX};

static WORDS_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{WORDS_PREFIX}(.+)\\.csv$")).expect("valid filename pattern")
});

/// One unit of resumable work: an input file and its derived output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestPair {
    /// Letter-harvest file name (input)
    pub input: String,

    /// Detail-harvest file name (output, derived)
    pub output: String,
}

/// Whether a file name follows the letter-harvest naming convention.
pub fn is_words_file(name: &str) -> bool {
    WORDS_FILE.is_match(name)
}

/// Derive the detail-harvest output name for a letter-harvest input.
///
/// `istrian_words_{stamp}.csv` becomes `istrian_dialect_{stamp}.csv`;
/// names outside the convention yield `None`.
pub fn derive_output_name(input: &str) -> Option<String> {
    WORDS_FILE
        .captures(input)
        .map(|captures| format!("{DIALECT_PREFIX}{}.csv", &captures[1]))
}

/// Split a directory listing into letter-harvest and detail-harvest files.
pub fn partition_listing(names: &[String]) -> (Vec<String>, Vec<String>) {
    let words = names
        .iter()
        .filter(|name| is_words_file(name))
        .cloned()
        .collect();
    let dialects = names
        .iter()
        .filter(|name| name.starts_with(DIALECT_PREFIX) && name.ends_with(".csv"))
        .cloned()
        .collect();
    (words, dialects)
}

/// Letter files that have no matching detail file yet, paired with the
/// output name each one expects.
pub fn unprocessed_pairs(letter_files: &[String], detail_files: &[String]) -> Vec<HarvestPair> {
    letter_files
        .iter()
        .filter_map(|input| {
            let output = derive_output_name(input)?;
            if detail_files.iter().any(|existing| *existing == output) {
                None
            } else {
                Some(HarvestPair {
                    input: input.clone(),
                    output,
                })
            }
        })
        .collect()
}
