//! LWTA rule row parsing
//!
//! Rows have the shape `pattern, replacement`. Hyphens on the pattern encode
//! where in a word it applies; hyphens on the replacement encode whether other
//! word material may precede or follow it. Both are stripped once the
//! information has been captured.

use super::row_source::RowSource;
use crate::Result;
use crate::app::models::{LwtaAbbreviation, Position};
use crate::constants::{HYPHEN, NOT_APPLICABLE};
use csv::StringRecord;
use indexmap::IndexSet;
use tracing::debug;

/// Parse LWTA rows into `rules` until input ends or a row lacks a pattern or
/// replacement
///
/// Same stopping rule as the journal parser: the first row with an empty
/// required field ends the parse silently and earlier rules are kept.
pub fn parse_lwta_rows<S: RowSource + ?Sized>(
    rows: &mut S,
    rules: &mut IndexSet<LwtaAbbreviation>,
) -> Result<()> {
    let mut row = StringRecord::new();
    let mut row_number = 0;

    while rows.read_row(&mut row)? {
        row_number += 1;

        let name = row.get(0).unwrap_or("");
        let abbreviation = row.get(1).unwrap_or("");

        if name.is_empty() || abbreviation.is_empty() {
            debug!("Stopping at row {}: missing pattern or replacement", row_number);
            break;
        }

        rules.insert(lwta_rule(name, abbreviation));
    }

    Ok(())
}

/// Derive a rule from raw, still-hyphenated pattern and replacement fields
pub fn lwta_rule(name: &str, abbreviation: &str) -> LwtaAbbreviation {
    let position = Position::from_pattern(name);

    // Affix flags come from the replacement as written, before any rewrite
    let allows_prefix = abbreviation.starts_with(HYPHEN);
    let allows_suffix = abbreviation.ends_with(HYPHEN);

    let abbreviation = if abbreviation == NOT_APPLICABLE {
        name
    } else {
        abbreviation
    };

    LwtaAbbreviation::new(
        remove_hyphens(name),
        remove_hyphens(abbreviation),
        position,
        allows_prefix,
        allows_suffix,
    )
}

/// Remove at most one leading and one trailing hyphen
pub fn remove_hyphens(value: &str) -> &str {
    let value = value.strip_prefix(HYPHEN).unwrap_or(value);
    value.strip_suffix(HYPHEN).unwrap_or(value)
}
