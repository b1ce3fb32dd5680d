// src/services/letters.rs

//! Letter enumerator.
//!
//! Discovers the per-letter entry URLs from the search index page.

use scraper::Html;
use url::Url;

use crate::error::Result;
use crate::models::SiteConfig;
use crate::services::{PageFetcher, parse_selector};
use crate::utils::resolve_url;

/// Fetch the index page and collect every per-letter entry link.
///
/// Links are returned in document order; duplicates are not filtered and
/// a page without matches yields an empty list.
pub async fn enumerate_letters(fetcher: &dyn PageFetcher, site: &SiteConfig) -> Result<Vec<String>> {
    let selector = parse_selector(&site.letter_links_selector)?;
    let base = Url::parse(&site.index_url)?;

    let body = fetcher.fetch(&site.index_url).await?;
    let document = Html::parse_document(&body);

    Ok(document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| resolve_url(&base, href))
        .collect())
}
