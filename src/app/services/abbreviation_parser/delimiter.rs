//! Delimiter auto-detection
//!
//! Abbreviation lists exist in both `;`- and `,`-separated flavours. The first
//! line of the file decides which one the tokenizer is configured with.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Peek the first line of `path` and return the first candidate it contains
///
/// Returns `Ok(None)` for an empty file or when no candidate appears. The file
/// is only peeked; the row reader opens it again from the start.
pub fn detect_delimiter(path: &Path, candidates: &[char]) -> Result<Option<char>> {
    let file = File::open(path).map_err(|e| {
        Error::io(format!("Failed to open file {}", path.display()), e)
    })?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line).map_err(|e| {
        Error::io(
            format!("Failed to read first line of {}", path.display()),
            e,
        )
    })?;

    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(detect_in_line(
        line.trim_end_matches(['\r', '\n']),
        candidates,
    ))
}

/// First candidate, in priority order, that occurs anywhere in `line`
pub fn detect_in_line(line: &str, candidates: &[char]) -> Option<char> {
    candidates.iter().copied().find(|&c| line.contains(c))
}
