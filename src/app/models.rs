//! Data models for journal abbreviation parsing
//!
//! This module contains the immutable value records produced by the parsers:
//! journal name abbreviations and LWTA word-abbreviation rules.

use crate::constants::HYPHEN;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Journal Abbreviation
// =============================================================================

/// A journal name with its standard and optional shortest unique abbreviation
///
/// Equality and hashing cover all three fields, so two rows that differ only
/// in the shortest unique abbreviation are distinct records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abbreviation {
    /// Full journal name (e.g., "Physical Review Letters")
    name: String,

    /// Standard abbreviation (e.g., "Phys. Rev. Lett.")
    abbreviation: String,

    /// Shortest unique abbreviation, empty when the file gives none
    #[serde(default)]
    shortest_unique_abbreviation: String,
}

impl Abbreviation {
    /// Create a new abbreviation record
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        shortest_unique_abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            shortest_unique_abbreviation: shortest_unique_abbreviation.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Shortest unique abbreviation, falling back to the standard one when unset
    pub fn shortest_unique_abbreviation(&self) -> &str {
        if self.shortest_unique_abbreviation.is_empty() {
            &self.abbreviation
        } else {
            &self.shortest_unique_abbreviation
        }
    }

    /// Whether no distinct shortest unique abbreviation was provided
    pub fn is_default_shortest_unique_abbreviation(&self) -> bool {
        self.shortest_unique_abbreviation.is_empty()
            || self.shortest_unique_abbreviation == self.abbreviation
    }

    /// Abbreviation with dots replaced by spaces ("Phys. Rev." -> "Phys Rev")
    pub fn dotless_abbreviation(&self) -> String {
        self.abbreviation
            .replace('.', " ")
            .replace("  ", " ")
            .trim()
            .to_string()
    }
}

impl fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.abbreviation)?;
        if !self.is_default_shortest_unique_abbreviation() {
            write!(f, " ({})", self.shortest_unique_abbreviation)?;
        }
        Ok(())
    }
}

// =============================================================================
// LWTA Rules
// =============================================================================

/// Where inside a word an LWTA pattern applies
///
/// The hyphen on a pattern marks where the rest of the word continues, so a
/// trailing hyphen (`chem-`) means the pattern starts a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    /// `-ology`: pattern ends a word
    EndsWord,
    /// `chem-`: pattern starts a word
    StartsWord,
    /// `-bio-`: pattern sits inside a word
    InWord,
    /// `intro`: pattern is a whole word
    FullWord,
}

impl Position {
    /// Infer the position from leading/trailing hyphens on a raw pattern
    pub fn from_pattern(pattern: &str) -> Self {
        let leading = pattern.starts_with(HYPHEN);
        let trailing = pattern.ends_with(HYPHEN);

        match (leading, trailing) {
            (true, true) => Position::InWord,
            (false, true) => Position::StartsWord,
            (true, false) => Position::EndsWord,
            (false, false) => Position::FullWord,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Position::EndsWord => "ENDS_WORD",
            Position::StartsWord => "STARTS_WORD",
            Position::InWord => "IN_WORD",
            Position::FullWord => "FULL_WORD",
        };
        f.write_str(label)
    }
}

/// A word-abbreviation rule from an LWTA file, with hyphen markers removed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LwtaAbbreviation {
    un_abbreviated: String,
    abbreviation: String,
    position: Position,
    allows_prefix: bool,
    allows_suffix: bool,
}

impl LwtaAbbreviation {
    pub fn new(
        un_abbreviated: impl Into<String>,
        abbreviation: impl Into<String>,
        position: Position,
        allows_prefix: bool,
        allows_suffix: bool,
    ) -> Self {
        Self {
            un_abbreviated: un_abbreviated.into(),
            abbreviation: abbreviation.into(),
            position,
            allows_prefix,
            allows_suffix,
        }
    }

    /// Pattern text without hyphen markers
    pub fn un_abbreviated(&self) -> &str {
        &self.un_abbreviated
    }

    /// Replacement text without hyphen markers
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Replacement may be preceded by other word material
    pub fn allows_prefix(&self) -> bool {
        self.allows_prefix
    }

    /// Replacement may be followed by other word material
    pub fn allows_suffix(&self) -> bool {
        self.allows_suffix
    }
}
