// src/pipeline/mod.rs

//! Pipeline entry points for harvest operations.
//!
//! - `run_letter_harvest`: collect word/link pairs for every letter
//! - `run_detail_harvest`: turn one word/link file into a dialect sheet
//! - `run_resume`: filename-convention resume over the data directory

pub mod details;
pub mod harvest;
pub mod resume;

pub use details::{DetailHarvestOutcome, run_detail_harvest};
pub use harvest::{LetterHarvestOutcome, run_letter_harvest};
pub use resume::{HarvestPair, derive_output_name, unprocessed_pairs};

use crate::error::Result;
use crate::models::Config;
use crate::services::PageFetcher;
use crate::storage::DataStore;

/// Resume-driven run.
///
/// Scans the data directory; when no letter-harvest file exists at all,
/// runs the letter harvest first and rescans. Every input file without a
/// matching dialect file is then detail-harvested; a failing file is
/// logged and the run continues with the next one.
pub async fn run_resume(
    config: &Config,
    store: &DataStore,
    fetcher: &dyn PageFetcher,
) -> Result<()> {
    store.ensure_root()?;

    let (letter_files, detail_files) = partition_store(store)?;
    let pairs = if letter_files.is_empty() {
        log::info!("No input files found. Running letter harvest first...");
        run_letter_harvest(config, store, fetcher).await?;

        let (letter_files, detail_files) = partition_store(store)?;
        unprocessed_pairs(&letter_files, &detail_files)
    } else {
        unprocessed_pairs(&letter_files, &detail_files)
    };

    if pairs.is_empty() {
        log::info!("Nothing to process.");
        return Ok(());
    }

    for pair in pairs {
        log::info!("Processing {} -> {}", pair.input, pair.output);
        match run_detail_harvest(config, store, fetcher, &pair.input, &pair.output).await {
            Ok(outcome) => log::info!(
                "Successfully processed {} ({} rows, {} skipped)",
                pair.input,
                outcome.processed,
                outcome.skipped
            ),
            Err(error) => log::error!("Error processing {}: {}", pair.input, error),
        }
    }

    Ok(())
}

fn partition_store(store: &DataStore) -> Result<(Vec<String>, Vec<String>)> {
    let names = store.list_file_names()?;
    Ok(resume::partition_listing(&names))
}
