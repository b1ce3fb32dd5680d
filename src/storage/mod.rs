// src/storage/mod.rs

//! On-disk layout of harvest artifacts.
//!
//! ```text
//! {root}/
//! ├── istrian_words_{stamp}.csv     # letter harvest: word,link (one per run)
//! └── istrian_dialect_{stamp}.csv   # detail harvest, name derived from input
//! ```
//!
//! The stamp is the run's local start time; the resume contract pairs the
//! two prefixes by stamp.

pub mod csv;

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Filename prefix of letter-harvest output files.
pub const WORDS_PREFIX: &str = "istrian_words_";

/// Filename prefix of detail-harvest output files.
pub const DIALECT_PREFIX: &str = "istrian_dialect_";

/// Filesystem handle for the harvest data directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    root_dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_dir)?;
        Ok(())
    }

    /// Full path for a file name inside the data directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }

    /// Path for a fresh letter-harvest file stamped with the current time.
    pub fn new_words_file(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        self.path(&format!("{WORDS_PREFIX}{stamp}.csv"))
    }

    /// File names present in the data directory, sorted.
    pub fn list_file_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_words_file_uses_prefix_and_stamp() {
        let store = DataStore::new("data");
        let path = store.new_words_file();
        let name = path.file_name().unwrap().to_str().unwrap();

        assert!(name.starts_with(WORDS_PREFIX));
        assert!(name.ends_with(".csv"));
        // istrian_words_YYYYMMDD_HHMMSS.csv
        assert_eq!(name.len(), WORDS_PREFIX.len() + 15 + 4);
    }

    #[test]
    fn test_list_file_names_sorted_files_only() {
        let tmp = TempDir::new().unwrap();
        let store = DataStore::new(tmp.path());

        std::fs::write(store.path("b.csv"), "x").unwrap();
        std::fs::write(store.path("a.csv"), "x").unwrap();
        std::fs::create_dir(store.path("subdir")).unwrap();

        assert_eq!(store.list_file_names().unwrap(), vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_ensure_root_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let store = DataStore::new(tmp.path().join("data"));

        store.ensure_root().unwrap();
        assert!(store.root().is_dir());
    }
}
