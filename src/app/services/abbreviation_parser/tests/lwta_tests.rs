//! Tests for LWTA rule parsing and hyphen handling

use super::*;
use crate::app::models::{LwtaAbbreviation, Position};
use crate::app::services::abbreviation_parser::lwta::{lwta_rule, parse_lwta_rows, remove_hyphens};
use indexmap::IndexSet;

#[test]
fn test_in_word_with_not_applicable_replacement() {
    let rule = lwta_rule("-bio-", "n.a.");

    assert_eq!(rule.un_abbreviated(), "bio");
    assert_eq!(rule.abbreviation(), "bio");
    assert_eq!(rule.position(), Position::InWord);
    assert!(!rule.allows_prefix());
    assert!(!rule.allows_suffix());
}

#[test]
fn test_starts_word_with_affixes() {
    let rule = lwta_rule("chem-", "-ch-");

    assert_eq!(rule.position(), Position::StartsWord);
    assert_eq!(rule.un_abbreviated(), "chem");
    assert_eq!(rule.abbreviation(), "ch");
    assert!(rule.allows_prefix());
    assert!(rule.allows_suffix());
}

#[test]
fn test_full_word() {
    let rule = lwta_rule("intro", "intr");

    assert_eq!(rule.position(), Position::FullWord);
    assert_eq!(rule.un_abbreviated(), "intro");
    assert_eq!(rule.abbreviation(), "intr");
    assert!(!rule.allows_prefix());
    assert!(!rule.allows_suffix());
}

#[test]
fn test_ends_word() {
    let rule = lwta_rule("-ology", "-ol.");

    assert_eq!(rule.position(), Position::EndsWord);
    assert_eq!(rule.un_abbreviated(), "ology");
    assert_eq!(rule.abbreviation(), "ol.");
    assert!(rule.allows_prefix());
    assert!(!rule.allows_suffix());
}

#[test]
fn test_affix_flags_independent_of_pattern() {
    // Suffix flag comes from the replacement even for a full-word pattern
    let rule = lwta_rule("journal", "j-");
    assert_eq!(rule.position(), Position::FullWord);
    assert!(!rule.allows_prefix());
    assert!(rule.allows_suffix());
}

#[test]
fn test_not_applicable_with_hyphenated_name() {
    let rule = lwta_rule("chem-", "n.a.");
    assert_eq!(rule.abbreviation(), "chem");
    assert_eq!(rule.position(), Position::StartsWord);
    // Flags are read from "n.a." itself, which carries no hyphens
    assert!(!rule.allows_prefix());
    assert!(!rule.allows_suffix());
}

#[test]
fn test_remove_hyphens() {
    assert_eq!(remove_hyphens("-bio-"), "bio");
    assert_eq!(remove_hyphens("chem-"), "chem");
    assert_eq!(remove_hyphens("-ology"), "ology");
    // Only one hyphen is removed from each end
    assert_eq!(remove_hyphens("--x--"), "-x-");
    assert_eq!(remove_hyphens("-"), "");
    assert_eq!(remove_hyphens(""), "");
}

#[test]
fn test_remove_hyphens_idempotent_on_plain_text() {
    for value in ["intro", "J. Phys.", "a-b", ""] {
        assert_eq!(remove_hyphens(value), value);
        assert_eq!(remove_hyphens(remove_hyphens(value)), remove_hyphens(value));
    }
}

#[test]
fn test_parse_rows_in_order() {
    let list = create_test_lwta_list();
    let mut rows = comma_rows(&list);
    let mut rules = IndexSet::new();

    parse_lwta_rows(&mut rows, &mut rules).unwrap();

    let positions: Vec<Position> = rules.iter().map(LwtaAbbreviation::position).collect();
    assert_eq!(
        positions,
        vec![
            Position::InWord,
            Position::StartsWord,
            Position::FullWord,
            Position::EndsWord
        ]
    );
}

#[test]
fn test_parse_rows_dedup_and_stop() {
    let mut rows = memory_rows(&[
        &["intro", "intr"],
        &["intro", "intr"],
        &["chem-", "ch"],
        &["orphan"],
        &["-bio-", "n.a."],
    ]);
    let mut rules = IndexSet::new();

    parse_lwta_rows(&mut rows, &mut rules).unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].un_abbreviated(), "intro");
    assert_eq!(rules[1].un_abbreviated(), "chem");
}

#[test]
fn test_same_pattern_different_position_is_distinct() {
    let mut rows = memory_rows(&[&["chem-", "ch"], &["-chem", "ch"]]);
    let mut rules = IndexSet::new();

    parse_lwta_rows(&mut rows, &mut rules).unwrap();

    assert_eq!(rules.len(), 2);
}
