// src/storage/csv.rs

//! CSV reading and writing for harvest artifacts.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::{DialectSheet, WordEntry};

// Spreadsheet applications detect UTF-8 from the byte-order mark.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Append word/link pairs to a letter-harvest file.
///
/// The file is created with a `word,link` header row on first use;
/// subsequent calls within the run append rows only.
pub fn append_words(path: &Path, words: &[WordEntry]) -> Result<()> {
    let new_file = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    if new_file {
        writer.write_record(["word", "link"])?;
    }
    for word in words {
        writer.serialize(word)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read word/link pairs from a letter-harvest file.
pub fn read_words(path: &Path) -> Result<Vec<WordEntry>> {
    let mut reader = ::csv::Reader::from_reader(BufReader::new(File::open(path)?));
    let mut words = Vec::new();
    for record in reader.deserialize() {
        words.push(record?);
    }
    Ok(words)
}

/// Write a complete dialect sheet: BOM, `croatian_word` + region columns,
/// blanks where a row predates a region's first appearance.
pub fn write_dialect_sheet(path: &Path, sheet: &DialectSheet) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(BOM)?;
    let mut writer = ::csv::Writer::from_writer(BufWriter::new(file));

    let mut header: Vec<&str> = Vec::with_capacity(sheet.columns().len() + 1);
    header.push("croatian_word");
    header.extend(sheet.columns().iter().map(String::as_str));
    writer.write_record(&header)?;

    for row in sheet.rows() {
        let mut record: Vec<&str> = Vec::with_capacity(header.len());
        record.push(&row.croatian_word);
        for column in sheet.columns() {
            record.push(row.get(column).unwrap_or(""));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DialectRow, RegionTable};
    use tempfile::TempDir;

    #[test]
    fn test_append_words_writes_header_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("istrian_words_20260805_120000.csv");

        append_words(&path, &[WordEntry::new("abit", "https://example.com/1")]).unwrap();
        append_words(&path, &[WordEntry::new("ajer", "https://example.com/2")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "word,link",
                "abit,https://example.com/1",
                "ajer,https://example.com/2",
            ]
        );
    }

    #[test]
    fn test_read_words_round_trips_append() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.csv");
        let words = vec![
            WordEntry::new("kuća", "https://example.com/1"),
            WordEntry::new("kuća", "https://example.com/1"),
        ];

        append_words(&path, &words).unwrap();

        // Duplicates pass through unchanged.
        assert_eq!(read_words(&path).unwrap(), words);
    }

    #[test]
    fn test_dialect_sheet_starts_with_bom() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dialect.csv");

        let mut table = RegionTable::new();
        table.insert("Labin", vec!["kadena".to_string()]);
        let mut sheet = DialectSheet::new();
        sheet.push(DialectRow::from_table("lanac", &table));

        write_dialect_sheet(&path, &sheet).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"\xef\xbb\xbf");
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "croatian_word,Labin\nlanac,kadena\n");
    }

    #[test]
    fn test_dialect_sheet_blank_fills_missing_regions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dialect.csv");

        let mut first = RegionTable::new();
        first.insert("Labin", vec!["a".to_string()]);
        let mut second = RegionTable::new();
        second.insert("Pula", vec!["b".to_string()]);

        let mut sheet = DialectSheet::new();
        sheet.push(DialectRow::from_table("prvi", &first));
        sheet.push(DialectRow::from_table("drugi", &second));

        write_dialect_sheet(&path, &sheet).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec!["croatian_word,Labin,Pula", "prvi,a,", "drugi,,b"]);
    }

    #[test]
    fn test_empty_sheet_writes_headword_column_only() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dialect.csv");

        write_dialect_sheet(&path, &DialectSheet::new()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "croatian_word\n");
    }
}
