// src/pipeline/details.rs

//! Detail harvest pipeline.
//!
//! Walks a word/link file, fetches and decodes every detail page, and
//! writes the full dialect sheet once at the end of the run. A failing row
//! is logged and dropped; the run continues.

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{Config, DialectRow, DialectSheet};
use crate::services::{PageFetcher, fetch_word_details};
use crate::storage::{DataStore, csv};

/// Summary of a detail harvest run.
#[derive(Debug)]
pub struct DetailHarvestOutcome {
    /// The written dialect file
    pub output_file: PathBuf,

    /// Rows written
    pub processed: usize,

    /// Rows dropped after a fetch or decode failure
    pub skipped: usize,
}

/// Run the detail harvest over one input file.
pub async fn run_detail_harvest(
    config: &Config,
    store: &DataStore,
    fetcher: &dyn PageFetcher,
    input_name: &str,
    output_name: &str,
) -> Result<DetailHarvestOutcome> {
    let entries = csv::read_words(&store.path(input_name))?;
    log::info!("Processing {} words from {input_name}", entries.len());

    let mut sheet = DialectSheet::new();
    let mut skipped = 0;

    for entry in &entries {
        match fetch_word_details(fetcher, &config.site, &entry.link).await {
            Ok(regions) => {
                sheet.push(DialectRow::from_table(&entry.word, &regions));
                log::debug!("Processed: {}", entry.word);
            }
            Err(error) => {
                skipped += 1;
                log::warn!("Error processing {}: {}", entry.word, error);
            }
        }
    }

    let output_file = store.path(output_name);
    csv::write_dialect_sheet(&output_file, &sheet)?;
    log::info!(
        "Wrote {} rows ({skipped} skipped) to {}",
        sheet.len(),
        output_file.display()
    );

    Ok(DetailHarvestOutcome {
        output_file,
        processed: sheet.len(),
        skipped,
    })
}
