//! Parser configuration
//!
//! Controls the delimiter candidates, quoting and trimming handed to the CSV
//! tokenizer. Configuration can come from defaults, a TOML file, or a file
//! named by the `JOURNAL_ABBREVIATIONS_CONFIG` environment variable.

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_DELIMITERS, DEFAULT_QUOTE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Tokenizer settings for abbreviation and LWTA files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Candidate delimiters, tested in order against the first line
    pub delimiters: Vec<char>,

    /// Quote character for fields containing the delimiter
    pub quote: char,

    /// Trim surrounding whitespace from every field
    pub trim_fields: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            quote: DEFAULT_QUOTE,
            trim_fields: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a TOML file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded parser config from {}", path.display());
        Ok(config)
    }

    /// Load configuration using layered approach (explicit file -> env -> defaults)
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);

        match config_file.or(env_path.as_deref()) {
            Some(path) => {
                info!("Using parser config file: {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check that every character can be handed to the byte-oriented tokenizer
    pub fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(Error::configuration(
                "At least one delimiter candidate is required",
            ));
        }

        for &delimiter in &self.delimiters {
            if !delimiter.is_ascii() {
                return Err(Error::configuration(format!(
                    "Delimiter '{}' is not an ASCII character",
                    delimiter
                )));
            }
            if delimiter == self.quote {
                return Err(Error::configuration(format!(
                    "Delimiter '{}' is also the quote character",
                    delimiter
                )));
            }
        }

        if !self.quote.is_ascii() {
            return Err(Error::configuration(format!(
                "Quote '{}' is not an ASCII character",
                self.quote
            )));
        }

        Ok(())
    }

    /// Quote character as the byte the tokenizer expects
    pub(crate) fn quote_byte(&self) -> u8 {
        // validate() guarantees ASCII; fall back to the default otherwise
        u8::try_from(self.quote).unwrap_or(DEFAULT_QUOTE as u8)
    }
}
