//! Row sources feeding the record parsers
//!
//! A row source yields rows of string fields one at a time. It is lazy,
//! finite and cannot be restarted. The record parsers only see this trait,
//! so delimiter and quoting configuration stay on the tokenizer side.

use crate::config::ParserConfig;
use crate::constants::NO_DELIMITER_BYTE;
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Producer of delimited rows
pub trait RowSource {
    /// Read the next row into `row`, returning `false` at end of input
    fn read_row(&mut self, row: &mut StringRecord) -> Result<bool>;
}

/// Row source backed by the `csv` tokenizer
pub struct CsvRowSource<R> {
    reader: csv::Reader<R>,
    /// File name used in error messages
    origin: String,
}

impl CsvRowSource<File> {
    /// Open `path` with the given delimiter (`None` reads each line as one field)
    pub fn from_path(path: &Path, delimiter: Option<char>, config: &ParserConfig) -> Result<Self> {
        let origin = path.to_string_lossy().to_string();
        let reader = reader_builder(delimiter, config)?
            .from_path(path)
            .map_err(|e| {
                Error::csv_parsing(origin.clone(), "Failed to open CSV file", Some(e))
            })?;

        Ok(Self { reader, origin })
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Tokenize an arbitrary reader, e.g. an in-memory buffer
    pub fn from_reader(
        reader: R,
        origin: impl Into<String>,
        delimiter: Option<char>,
        config: &ParserConfig,
    ) -> Result<Self> {
        Ok(Self {
            reader: reader_builder(delimiter, config)?.from_reader(reader),
            origin: origin.into(),
        })
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn read_row(&mut self, row: &mut StringRecord) -> Result<bool> {
        self.reader.read_record(row).map_err(|e| {
            Error::csv_parsing(self.origin.clone(), "Failed to read CSV record", Some(e))
        })
    }
}

/// Tokenizer settings shared by file and in-memory sources
///
/// No header row, ragged rows allowed, blank lines skipped by the tokenizer.
fn reader_builder(delimiter: Option<char>, config: &ParserConfig) -> Result<ReaderBuilder> {
    let delimiter_byte = match delimiter {
        Some(c) => u8::try_from(c)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                Error::configuration(format!("Delimiter '{}' is not an ASCII character", c))
            })?,
        None => NO_DELIMITER_BYTE,
    };

    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter_byte)
        .quote(config.quote_byte())
        .trim(if config.trim_fields {
            Trim::All
        } else {
            Trim::None
        });

    Ok(builder)
}

/// Row source over rows already held in memory
#[derive(Debug, Clone)]
pub struct MemoryRowSource {
    rows: std::vec::IntoIter<StringRecord>,
}

impl MemoryRowSource {
    /// Build a source from any nested collection of fields
    pub fn from_rows<I, F, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<StringRecord> = rows
            .into_iter()
            .map(|fields| fields.into_iter().collect())
            .collect();

        Self {
            rows: rows.into_iter(),
        }
    }
}

impl RowSource for MemoryRowSource {
    fn read_row(&mut self, row: &mut StringRecord) -> Result<bool> {
        match self.rows.next() {
            Some(next) => {
                *row = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
