// src/services/table.rs

//! Dialect table decoder.
//!
//! Pure extraction of the region/variants table on a word's detail page.
//! The table lays one region per column: a header row whose `th` links
//! carry the region name in their `title` attribute, and a single body row
//! whose cells hold `<br>`-separated word variants.

use std::sync::LazyLock;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

use crate::models::RegionTable;

static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").expect("valid selector"));
static BODY_CELLS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody td").expect("valid selector"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// A classified child node of a table cell.
enum CellFragment {
    /// Plain text content
    Text(String),
    /// `<br>`, the token separator
    LineBreak,
    /// Inline `<span>` styling wrapper
    InlineSpan(String),
    /// Any other element
    Other(String),
}

impl CellFragment {
    /// Classify a cell child node; comments and the like yield `None`.
    fn classify(node: NodeRef<'_, Node>) -> Option<Self> {
        if let Some(text) = node.value().as_text() {
            return Some(Self::Text(text.to_string()));
        }

        let element = ElementRef::wrap(node)?;
        Some(match element.value().name() {
            "br" => Self::LineBreak,
            "span" => Self::InlineSpan(element.text().collect()),
            _ => Self::Other(element.text().collect()),
        })
    }
}

/// Decode the dialect table of a detail page into a region/variants map.
///
/// Returns an empty map when the page has no table matching
/// `table_selector`. Header cells without a link keep an empty-string
/// region name; headers and body cells are paired positionally, stopping
/// at the shorter sequence.
pub fn decode_dialect_table(document: &Html, table_selector: &Selector) -> RegionTable {
    let mut regions = RegionTable::new();

    let Some(table) = document.select(table_selector).next() else {
        return regions;
    };

    let headers: Vec<String> = table
        .select(&TH)
        .map(|th| {
            th.select(&ANCHOR)
                .next()
                .and_then(|a| a.value().attr("title"))
                .unwrap_or("")
                .to_string()
        })
        .collect();

    for (header, cell) in headers.into_iter().zip(table.select(&BODY_CELLS)) {
        regions.insert(header, cell_tokens(cell));
    }

    regions
}

/// Reconstruct a cell's variant tokens from its child-node sequence.
///
/// `<br>` flushes the accumulator as a trimmed token; text and inline
/// elements append to it. Empty tokens and the `-` "no known variant"
/// sentinel are dropped; a cell left with nothing yields a single empty
/// token so every region keeps an entry.
fn cell_tokens(cell: ElementRef<'_>) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for child in cell.children() {
        match CellFragment::classify(child) {
            Some(CellFragment::LineBreak) => {
                if !current.is_empty() {
                    tokens.push(current.trim().to_string());
                    current.clear();
                }
            }
            Some(CellFragment::Text(text))
            | Some(CellFragment::InlineSpan(text))
            | Some(CellFragment::Other(text)) => current.push_str(&text),
            None => {}
        }
    }
    if !current.is_empty() {
        tokens.push(current.trim().to_string());
    }

    tokens.retain(|token| !token.is_empty() && token != "-");
    if tokens.is_empty() {
        tokens.push(String::new());
    }
    tokens
}
