//! Journal abbreviation row parsing
//!
//! Rows have the shape `name, abbreviation[, shortest unique abbreviation]`.

use super::row_source::RowSource;
use crate::Result;
use crate::app::models::Abbreviation;
use csv::StringRecord;
use indexmap::IndexSet;
use tracing::debug;

/// Parse journal rows into `abbreviations` until input ends or a row lacks a
/// name or abbreviation
///
/// A row with an empty name or abbreviation ends the parse without an error;
/// lists commonly finish with blank or comment trailers. Records accumulated
/// before that row are kept. Duplicate records are dropped by the set.
pub fn parse_journal_rows<S: RowSource + ?Sized>(
    rows: &mut S,
    abbreviations: &mut IndexSet<Abbreviation>,
) -> Result<()> {
    let mut row = StringRecord::new();
    let mut row_number = 0;

    while rows.read_row(&mut row)? {
        row_number += 1;

        let Some(abbreviation) = journal_abbreviation_from_row(&row) else {
            debug!("Stopping at row {}: missing name or abbreviation", row_number);
            break;
        };

        abbreviations.insert(abbreviation);
    }

    Ok(())
}

/// Build an abbreviation from a row, or `None` when a required field is empty
pub fn journal_abbreviation_from_row(row: &StringRecord) -> Option<Abbreviation> {
    let name = row.get(0).unwrap_or("");
    let abbreviation = row.get(1).unwrap_or("");
    let shortest_unique_abbreviation = row.get(2).unwrap_or("");

    if name.is_empty() || abbreviation.is_empty() {
        return None;
    }

    Some(Abbreviation::new(
        name,
        abbreviation,
        shortest_unique_abbreviation,
    ))
}
