// src/services/mod.rs

//! Harvesting services: page fetching, letter enumeration, word list
//! crawling, and dialect table decoding.

pub mod details;
pub mod fetch;
pub mod letters;
pub mod table;
pub mod words;

pub use details::fetch_word_details;
pub use fetch::{HttpFetcher, PageFetcher};
pub use letters::enumerate_letters;
pub use table::decode_dialect_table;
pub use words::crawl_letter;

use scraper::Selector;

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures into an application error.
pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
