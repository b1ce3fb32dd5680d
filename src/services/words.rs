// src/services/words.rs

//! Word list crawler.
//!
//! Paginates through one letter's result pages, collecting word/link pairs.
//! The site's "next" affordance is unreliable: it can be missing, point
//! back at an already-seen page, or point at the page itself when disabled.
//! Termination is guaranteed by the self-loop check, a visited set, and a
//! page ceiling.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{SiteConfig, WordEntry};
use crate::services::{PageFetcher, parse_selector};
use crate::utils::resolve_url;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// One visited result page: its word/link pairs and the next-page URL.
struct PageScan {
    words: Vec<WordEntry>,
    next: Option<String>,
}

/// Crawl one letter's result pages, visiting at most `max_pages`.
///
/// Returns the word/link pairs of every visited page in visitation order.
/// An absent results container contributes zero pairs and does not stop
/// the crawl.
pub async fn crawl_letter(
    fetcher: &dyn PageFetcher,
    site: &SiteConfig,
    start_url: &str,
    max_pages: usize,
) -> Result<Vec<WordEntry>> {
    let results_sel = parse_selector(&site.results_selector)?;
    let next_sel = parse_selector(&site.next_link_selector)?;

    let mut entries = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut page_count = 0;
    let mut current = Some(start_url.to_string());

    while let Some(url) = current.take() {
        if page_count >= max_pages {
            log::debug!("Page ceiling of {max_pages} reached, stopping");
            break;
        }
        if !visited.insert(url.clone()) {
            log::debug!("Already visited {url}, stopping");
            break;
        }

        log::info!("Scraping {url}");
        let body = fetcher.fetch(&url).await?;
        let scan = scan_page(&body, &url, &results_sel, &next_sel);
        entries.extend(scan.words);
        page_count += 1;

        // A disabled "next" renders as a link to the page itself.
        current = scan.next.filter(|next| *next != url);
    }

    Ok(entries)
}

/// Extract word/link pairs and the next-page URL from one page body.
fn scan_page(body: &str, page_url: &str, results_sel: &Selector, next_sel: &Selector) -> PageScan {
    let document = Html::parse_document(body);
    let base = Url::parse(page_url).ok();
    let absolute = |href: &str| match &base {
        Some(base) => resolve_url(base, href),
        None => href.to_string(),
    };

    let mut words = Vec::new();
    if let Some(container) = document.select(results_sel).next() {
        for anchor in container.select(&ANCHOR) {
            let text = anchor.text().collect::<String>().trim().to_string();
            let href = anchor.value().attr("href").unwrap_or("");
            if !text.is_empty() && !href.is_empty() {
                words.push(WordEntry::new(text, absolute(href)));
            }
        }
    }

    let next = document
        .select(next_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(absolute);

    PageScan { words, next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakePages;

    const PAGE_1: &str = "https://example.com/pretrazivanje/1/A/";
    const PAGE_2: &str = "https://example.com/pretrazivanje/1/A/2/";
    const PAGE_3: &str = "https://example.com/pretrazivanje/1/A/3/";

    fn results_page(words: &[(&str, &str)], next_href: Option<&str>) -> String {
        let mut body = String::from("<div id=\"rezultati-pretrazivanja\">");
        for (word, href) in words {
            body.push_str(&format!("<a href=\"{href}\">{word}</a>"));
        }
        body.push_str("</div>");
        if let Some(href) = next_href {
            body.push_str(&format!("<a title=\"Sljedeca\" href=\"{href}\">&gt;</a>"));
        }
        body
    }

    async fn crawl(fetcher: &FakePages, max_pages: usize) -> Vec<WordEntry> {
        crawl_letter(fetcher, &SiteConfig::default(), PAGE_1, max_pages)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_three_page_chain_with_self_loop_terminates() {
        let fetcher = FakePages::new()
            .with_page(PAGE_1, &results_page(&[("abadešin", "/rijec/1")], Some(PAGE_2)))
            .with_page(PAGE_2, &results_page(&[("abit", "/rijec/2")], Some(PAGE_3)))
            .with_page(PAGE_3, &results_page(&[("ajer", "/rijec/3")], Some(PAGE_3)));

        let words = crawl(&fetcher, 20).await;

        assert_eq!(fetcher.fetched(), vec![PAGE_1, PAGE_2, PAGE_3]);
        let collected: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(collected, vec!["abadešin", "abit", "ajer"]);
    }

    #[tokio::test]
    async fn test_backward_next_link_trips_loop_guard() {
        let fetcher = FakePages::new()
            .with_page(PAGE_1, &results_page(&[("abit", "/rijec/2")], Some(PAGE_2)))
            .with_page(PAGE_2, &results_page(&[("ajer", "/rijec/3")], Some(PAGE_1)));

        let words = crawl(&fetcher, 20).await;

        // Page 1 is not fetched a second time.
        assert_eq!(fetcher.fetched(), vec![PAGE_1, PAGE_2]);
        assert_eq!(words.len(), 2);
    }

    #[tokio::test]
    async fn test_page_ceiling_bounds_the_crawl() {
        let fetcher = FakePages::new()
            .with_page(PAGE_1, &results_page(&[("abit", "/rijec/2")], Some(PAGE_2)))
            .with_page(PAGE_2, &results_page(&[("ajer", "/rijec/3")], Some(PAGE_3)));

        let words = crawl(&fetcher, 1).await;

        assert_eq!(fetcher.fetched(), vec![PAGE_1]);
        assert_eq!(words.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_next_link_stops_after_page() {
        let fetcher =
            FakePages::new().with_page(PAGE_1, &results_page(&[("abit", "/rijec/2")], None));

        let words = crawl(&fetcher, 20).await;

        assert_eq!(fetcher.fetched(), vec![PAGE_1]);
        assert_eq!(words.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_results_container_yields_no_pairs() {
        let fetcher = FakePages::new()
            .with_page(PAGE_1, &format!(
                "<p>prazno</p><a title=\"Sljedeca\" href=\"{PAGE_2}\">&gt;</a>"
            ))
            .with_page(PAGE_2, &results_page(&[("abit", "/rijec/2")], None));

        let words = crawl(&fetcher, 20).await;

        // The empty page contributes nothing but pagination continues.
        assert_eq!(fetcher.fetched(), vec![PAGE_1, PAGE_2]);
        assert_eq!(words.len(), 1);
    }

    #[tokio::test]
    async fn test_relative_links_resolve_against_page_url() {
        let fetcher =
            FakePages::new().with_page(PAGE_1, &results_page(&[("abit", "/rijec/2")], None));

        let words = crawl(&fetcher, 20).await;

        assert_eq!(words[0].link, "https://example.com/rijec/2");
    }

    #[tokio::test]
    async fn test_anchors_without_text_or_href_are_skipped() {
        let body = "<div id=\"rezultati-pretrazivanja\">\
                    <a href=\"/rijec/1\">abit</a>\
                    <a href=\"/rijec/2\">   </a>\
                    <a>ajer</a>\
                    </div>";
        let fetcher = FakePages::new().with_page(PAGE_1, body);

        let words = crawl(&fetcher, 20).await;

        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "abit");
    }
}
