//! Test utilities for abbreviation parser testing
//!
//! Helpers for building temporary list files and in-memory row sources used
//! across the test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::row_source::{CsvRowSource, MemoryRowSource};
use crate::config::ParserConfig;

mod lwta_tests;

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a temporary file with raw bytes (e.g., invalid UTF-8)
pub fn create_temp_file_bytes(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Tokenize comma-separated text the same way a detected `,` file would be
pub fn comma_rows(content: &str) -> CsvRowSource<&[u8]> {
    CsvRowSource::from_reader(
        content.as_bytes(),
        "in-memory",
        Some(','),
        &ParserConfig::default(),
    )
    .unwrap()
}

/// In-memory rows from string slices
pub fn memory_rows(rows: &[&[&str]]) -> MemoryRowSource {
    MemoryRowSource::from_rows(rows.iter().map(|row| row.iter()))
}

/// Helper to create a small semicolon-separated journal list
pub fn create_test_journal_list() -> String {
    "Physical Review Letters;Phys. Rev. Lett.;PRL\n\
     Nature;Nat.\n\
     Journal of Chemical Physics;J. Chem. Phys.\n"
        .to_string()
}

/// Helper to create a small LWTA rule list
pub fn create_test_lwta_list() -> String {
    "-bio-,n.a.\n\
     chem-,-ch-\n\
     intro,intr\n\
     -ology,-ol.\n"
        .to_string()
}
