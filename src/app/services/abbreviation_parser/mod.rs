//! Abbreviation list and LWTA rule file parser
//!
//! This module reads delimiter-separated abbreviation files into ordered,
//! duplicate-free collections. Reads on one [`AbbreviationParser`] accumulate,
//! so several lists can be merged into a single collection.
//!
//! ## Architecture
//!
//! - [`delimiter`] - First-line delimiter detection (`;` before `,`)
//! - [`row_source`] - Row producers: `csv`-backed files and in-memory rows
//! - [`journal`] - Journal name rows into [`Abbreviation`] records
//! - [`lwta`] - LWTA rule rows into [`LwtaAbbreviation`] records
//!
//! ## Usage
//!
//! ```rust
//! use journal_abbreviations::AbbreviationParser;
//!
//! # fn example() -> journal_abbreviations::Result<()> {
//! let mut parser = AbbreviationParser::new();
//! parser.read_journal_list_from_file(std::path::Path::new("journals.csv"))?;
//! parser.read_lwta_abbreviations(std::path::Path::new("ltwa.csv"))?;
//!
//! println!("Loaded {} journals and {} word rules",
//!          parser.abbreviations().len(),
//!          parser.lwta_abbreviations().len());
//! # Ok(())
//! # }
//! ```

pub mod delimiter;
pub mod journal;
pub mod lwta;
pub mod row_source;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use delimiter::detect_delimiter;
pub use journal::parse_journal_rows;
pub use lwta::{parse_lwta_rows, remove_hyphens};
pub use row_source::{CsvRowSource, MemoryRowSource, RowSource};

use crate::Result;
use crate::app::models::{Abbreviation, LwtaAbbreviation};
use crate::config::ParserConfig;
use indexmap::IndexSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Reader for journal abbreviation lists and LWTA rule files
///
/// Owns one ordered unique collection per record kind. Each read fully
/// consumes its file before returning; the collections are valid to inspect
/// after any read has completed or stopped early.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationParser {
    config: ParserConfig,

    /// Journal abbreviations in first-seen order
    abbreviations: IndexSet<Abbreviation>,

    /// LWTA rules in first-seen order
    lwta_abbreviations: IndexSet<LwtaAbbreviation>,
}

impl AbbreviationParser {
    /// Create a parser with the default `;`/`,` detection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom tokenizer settings
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read a journal list formatted as `Full Name,Abbr.[,Shortest]`
    ///
    /// On an I/O or tokenizer failure nothing from this file is added.
    pub fn read_journal_list_from_file(&mut self, file_path: &Path) -> Result<()> {
        info!("Reading journal abbreviation list: {}", file_path.display());

        let mut staged = IndexSet::new();
        {
            let mut rows = self.open_rows(file_path)?;
            parse_journal_rows(&mut rows, &mut staged)?;
        }

        let added = merge_staged(&mut self.abbreviations, staged);
        info!(
            "Added {} journal abbreviations from {} ({} total)",
            added,
            file_path.display(),
            self.abbreviations.len()
        );
        Ok(())
    }

    /// Read an LWTA rule file formatted as `pattern,replacement`
    ///
    /// On an I/O or tokenizer failure nothing from this file is added.
    pub fn read_lwta_abbreviations(&mut self, file_path: &Path) -> Result<()> {
        info!("Reading LWTA rules: {}", file_path.display());

        let mut staged = IndexSet::new();
        {
            let mut rows = self.open_rows(file_path)?;
            parse_lwta_rows(&mut rows, &mut staged)?;
        }

        let added = merge_staged(&mut self.lwta_abbreviations, staged);
        info!(
            "Added {} LWTA rules from {} ({} total)",
            added,
            file_path.display(),
            self.lwta_abbreviations.len()
        );
        Ok(())
    }

    /// Parse journal rows from an already-configured row source
    pub fn parse_journal_rows_from<S: RowSource + ?Sized>(&mut self, rows: &mut S) -> Result<()> {
        let mut staged = IndexSet::new();
        parse_journal_rows(rows, &mut staged)?;
        merge_staged(&mut self.abbreviations, staged);
        Ok(())
    }

    /// Parse LWTA rows from an already-configured row source
    pub fn parse_lwta_rows_from<S: RowSource + ?Sized>(&mut self, rows: &mut S) -> Result<()> {
        let mut staged = IndexSet::new();
        parse_lwta_rows(rows, &mut staged)?;
        merge_staged(&mut self.lwta_abbreviations, staged);
        Ok(())
    }

    /// Journal abbreviations read so far
    pub fn abbreviations(&self) -> &IndexSet<Abbreviation> {
        &self.abbreviations
    }

    /// LWTA rules read so far
    pub fn lwta_abbreviations(&self) -> &IndexSet<LwtaAbbreviation> {
        &self.lwta_abbreviations
    }

    /// Hand both collections to the caller
    pub fn into_parts(self) -> (IndexSet<Abbreviation>, IndexSet<LwtaAbbreviation>) {
        (self.abbreviations, self.lwta_abbreviations)
    }

    /// Detect the delimiter and open a row source over the whole file
    fn open_rows(&self, file_path: &Path) -> Result<CsvRowSource<File>> {
        let delimiter = detect_delimiter(file_path, &self.config.delimiters)?;
        match delimiter {
            Some(c) => debug!("Detected delimiter {:?} in {}", c, file_path.display()),
            None => debug!(
                "No delimiter detected in {}, reading lines as single fields",
                file_path.display()
            ),
        }

        CsvRowSource::from_path(file_path, delimiter, &self.config)
    }
}

/// Append staged records in order, skipping ones already present
fn merge_staged<T: std::hash::Hash + Eq>(target: &mut IndexSet<T>, staged: IndexSet<T>) -> usize {
    let before = target.len();
    target.extend(staged);
    target.len() - before
}
