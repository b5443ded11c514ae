//! Journal Abbreviations Library
//!
//! Reads journal abbreviation lists and LWTA (List of Word/Title Abbreviations)
//! rule files from delimiter-separated text into ordered, duplicate-free
//! collections of typed records.
//!
//! This library provides tools for:
//! - Detecting the delimiter (`;` or `,`) from the first line of a file
//! - Parsing journal rows into [`Abbreviation`] records
//! - Parsing LWTA rows into [`LwtaAbbreviation`] records with word-position
//!   and affix inference from hyphen markers
//! - Layered parser configuration and structured logging setup

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod abbreviation_parser;
    }
}

// Re-export commonly used types
pub use app::models::{Abbreviation, LwtaAbbreviation, Position};
pub use app::services::abbreviation_parser::AbbreviationParser;
pub use config::ParserConfig;

/// Result type alias for abbreviation parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for abbreviation file parsing
///
/// Malformed rows and duplicate records are not errors: the former stop a
/// parse silently, the latter are absorbed by the output collections.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV tokenizer error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures that came from reading the underlying file
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::CsvParsing { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
