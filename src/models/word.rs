//! Word list entry data structure.

use serde::{Deserialize, Serialize};

/// A word collected from a letter's result pages.
///
/// Uniqueness is not enforced; the same word may appear under more than one
/// letter and is passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    /// Standard-Croatian headword
    pub word: String,

    /// Absolute URL of the word's detail page
    pub link: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            link: link.into(),
        }
    }
}
