// src/pipeline/harvest.rs

//! Letter harvest pipeline.
//!
//! Enumerates per-letter entry pages, crawls each letter's word list, and
//! appends every letter's pairs to a single run-stamped CSV as soon as the
//! letter finishes. A failure mid-run therefore loses at most the letter
//! being crawled; an error during one letter aborts the remaining letters.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::{Config, WordEntry};
use crate::services::{PageFetcher, crawl_letter, enumerate_letters};
use crate::storage::{DataStore, csv};

/// Summary of a letter harvest run.
#[derive(Debug)]
pub struct LetterHarvestOutcome {
    /// The run's words file
    pub words_file: PathBuf,

    /// Distinct letter pages crawled
    pub letters_processed: usize,

    /// Every collected pair, in collection order
    pub words: Vec<WordEntry>,
}

/// Run the letter harvest: enumerate letters, crawl each word list, and
/// persist pairs per letter into a fresh run-stamped file.
pub async fn run_letter_harvest(
    config: &Config,
    store: &DataStore,
    fetcher: &dyn PageFetcher,
) -> Result<LetterHarvestOutcome> {
    log::info!("Enumerating letters from {}", config.site.index_url);
    let letters = enumerate_letters(fetcher, &config.site).await?;
    log::info!("Found {} letter pages", letters.len());

    store.ensure_root()?;
    let words_file = store.new_words_file();

    let mut outcome = LetterHarvestOutcome {
        words_file: words_file.clone(),
        letters_processed: 0,
        words: Vec::new(),
    };
    let mut processed: HashSet<String> = HashSet::new();

    for letter_url in letters {
        if !processed.insert(letter_url.clone()) {
            continue;
        }

        let letter = letter_label(&letter_url);
        log::info!("Processing letter {letter}");

        let words = crawl_letter(fetcher, &config.site, &letter_url, config.harvest.max_pages)
            .await?;

        // Persist before moving to the next letter.
        csv::append_words(&words_file, &words)?;
        log::info!("Letter {letter}: {} words", words.len());

        outcome.letters_processed += 1;
        outcome.words.extend(words);
    }

    log::info!(
        "Letter harvest complete: {} words in {}",
        outcome.words.len(),
        outcome.words_file.display()
    );
    Ok(outcome)
}

/// Trailing path segment of a letter URL, for log lines.
fn letter_label(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}
