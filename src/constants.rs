//! Application constants for journal abbreviation parsing
//!
//! Delimiter candidates, marker characters and sentinel tokens shared by the
//! delimiter detector and the record parsers.

// =============================================================================
// Delimiter Detection
// =============================================================================

/// Candidate delimiters in priority order
///
/// Semicolon wins over comma when both appear on the first line, since older
/// comma-separated lists may carry commas inside unquoted names.
pub const DEFAULT_DELIMITERS: &[char] = &[';', ','];

/// Default quote character handed to the CSV tokenizer
pub const DEFAULT_QUOTE: char = '"';

/// Delimiter byte used when no candidate was found on the first line
///
/// NUL never appears in the text files we read, so every line becomes a
/// single field.
pub const NO_DELIMITER_BYTE: u8 = b'\0';

// =============================================================================
// LWTA Markers
// =============================================================================

/// Marks where the rest of a word continues in LWTA patterns and replacements
pub const HYPHEN: char = '-';

/// "Not applicable" replacement: the pattern is its own abbreviation
pub const NOT_APPLICABLE: &str = "n.a.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor a caller-provided level is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for a config file path
pub const CONFIG_PATH_ENV: &str = "JOURNAL_ABBREVIATIONS_CONFIG";
