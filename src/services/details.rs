// src/services/details.rs

//! Detail page fetcher.
//!
//! Fetches one word's detail page and hands its markup to the table
//! decoder. Network failures propagate; the caller decides per row
//! whether to skip.

use scraper::Html;

use crate::error::Result;
use crate::models::{RegionTable, SiteConfig};
use crate::services::{PageFetcher, decode_dialect_table, parse_selector};

/// Fetch a word's detail page and decode its dialect table.
pub async fn fetch_word_details(
    fetcher: &dyn PageFetcher,
    site: &SiteConfig,
    url: &str,
) -> Result<RegionTable> {
    let table_sel = parse_selector(&site.table_selector)?;

    let body = fetcher.fetch(url).await?;
    let document = Html::parse_document(&body);

    Ok(decode_dialect_table(&document, &table_sel))
}
