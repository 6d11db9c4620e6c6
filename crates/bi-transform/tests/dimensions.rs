//! Tests for dimension building.

mod common;

use bi_model::{LookupTables, UNKNOWN};
use bi_transform::{build_dimensions, decade_label};
use common::{ai_record, energy_record};

#[test]
fn country_keys_cover_energy_before_ai() {
    let energy = vec![
        energy_record("Norway", 2020, Some(1.0)),
        energy_record("Chile", 2020, Some(1.0)),
    ];
    let ai = vec![
        ai_record("Kenya", 2020, "Media", "Claude", "Strict", None),
        ai_record("Norway", 2020, "Media", "Claude", "Strict", None),
    ];

    let dims = build_dimensions(&energy, &ai, &LookupTables::default());

    let countries: Vec<(&str, i64)> = dims
        .country
        .rows()
        .iter()
        .map(|row| (row.key.as_str(), row.id))
        .collect();
    assert_eq!(countries, vec![("Norway", 1), ("Chile", 2), ("Kenya", 3)]);
    assert_eq!(dims.country.id_of(&"Kenya".to_string()), Some(3));
}

#[test]
fn industry_and_status_come_from_ai_rows_only() {
    let energy = vec![energy_record("Norway", 2018, Some(1.0))];
    let ai = vec![
        ai_record("Norway", 2020, "Media", "Claude", "Strict", None),
        ai_record("Norway", 2021, "Finance", "Claude", "Moderate", None),
        ai_record("Norway", 2022, "Media", "Claude", "Strict", None),
    ];

    let dims = build_dimensions(&energy, &ai, &LookupTables::default());

    assert_eq!(dims.industry.len(), 2);
    assert_eq!(dims.regulation.len(), 2);
    assert_eq!(dims.ai_tool.len(), 1);
    let years: Vec<i64> = dims.date.rows().iter().map(|row| row.key).collect();
    assert_eq!(years, vec![2018, 2020, 2021, 2022]);
    assert!(dims.industry.rows().iter().all(|row| row.attribute.is_none()));
}

#[test]
fn enrichment_uses_lookups_with_unknown_fallback() {
    let ai = vec![
        ai_record("Germany", 1995, "Media", "Midjourney", "Strict", None),
        ai_record("Atlantis", 2004, "Media", "Copilot", "Strict", None),
    ];

    let dims = build_dimensions(&[], &ai, &LookupTables::default());

    let regions: Vec<Option<&str>> = dims
        .country
        .rows()
        .iter()
        .map(|row| row.attribute.as_deref())
        .collect();
    assert_eq!(regions, vec![Some("Europe"), Some(UNKNOWN)]);
    let tool_types: Vec<Option<&str>> = dims
        .ai_tool
        .rows()
        .iter()
        .map(|row| row.attribute.as_deref())
        .collect();
    assert_eq!(tool_types, vec![Some("Image Generation"), Some(UNKNOWN)]);
    let decades: Vec<Option<&str>> = dims
        .date
        .rows()
        .iter()
        .map(|row| row.attribute.as_deref())
        .collect();
    assert_eq!(decades, vec![Some("1990s"), Some("2000s")]);
}

#[test]
fn decade_label_floors_negative_years() {
    assert_eq!(decade_label(2000), "2000s");
    assert_eq!(decade_label(2009), "2000s");
    assert_eq!(decade_label(-1), "-10s");
    assert_eq!(decade_label(-10), "-10s");
    assert_eq!(decade_label(-11), "-20s");
    assert_eq!(decade_label(i64::MIN), "-9223372036854775810s");
    assert_eq!(decade_label(i64::MAX), "9223372036854775800s");
}

#[test]
fn rebuilding_from_same_rows_gives_same_keys() {
    let ai = vec![
        ai_record("Peru", 2020, "Media", "Claude", "Strict", None),
        ai_record("Chile", 2021, "Retail", "Bard", "Lenient", None),
    ];
    let first = build_dimensions(&[], &ai, &LookupTables::default());
    let second = build_dimensions(&[], &ai, &LookupTables::default());

    assert_eq!(first.country.rows(), second.country.rows());
    assert_eq!(first.date.rows(), second.date.rows());
}
