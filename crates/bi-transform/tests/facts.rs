//! Tests for foreign-key assignment and the energy join.

mod common;

use bi_model::{DimensionKind, LookupTables, PipelineOptions, SENTINEL, UnmappedKeyPolicy};
use bi_transform::{
    TransformError, assemble_facts, assign_energy_keys, assign_foreign_keys, build_dimensions,
    join_energy,
};
use common::{ai_record, energy_record};

#[test]
fn foreign_keys_follow_dimension_order() {
    let ai = vec![
        ai_record("Spain", 2021, "Media", "Claude", "Strict", Some(1.0)),
        ai_record("Italy", 2020, "Retail", "Bard", "Lenient", Some(2.0)),
    ];
    let dims = build_dimensions(&[], &ai, &LookupTables::default());

    let keyed = assign_foreign_keys(&ai, &dims, UnmappedKeyPolicy::Fail).unwrap();

    assert_eq!(keyed[0].keys.to_array(), [1, 1, 1, 1, 1]);
    assert_eq!(keyed[1].keys.to_array(), [2, 2, 2, 2, 2]);
}

#[test]
fn unmapped_key_fails_by_default() {
    let known = vec![ai_record("Spain", 2021, "Media", "Claude", "Strict", None)];
    let dims = build_dimensions(&[], &known, &LookupTables::default());
    let ai = vec![ai_record("Spain", 2021, "Media", "Copilot", "Strict", None)];

    let err = assign_foreign_keys(&ai, &dims, UnmappedKeyPolicy::Fail).unwrap_err();

    match &err {
        TransformError::UnmappedKey { dimension, key, .. } => {
            assert_eq!(*dimension, DimensionKind::AiTool);
            assert_eq!(key, "Copilot");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "facts: no dim_top_ai_tool entry for key 'Copilot'"
    );
}

#[test]
fn unmapped_key_becomes_sentinel_when_configured() {
    let known = vec![ai_record("Spain", 2021, "Media", "Claude", "Strict", None)];
    let dims = build_dimensions(&[], &known, &LookupTables::default());
    let ai = vec![ai_record("Peru", 2021, "Media", "Claude", "Strict", None)];
    let options = PipelineOptions::new().with_unmapped_keys(UnmappedKeyPolicy::Sentinel);

    let assembled = assemble_facts(&ai, &[], &dims, &options).unwrap();

    assert_eq!(assembled.unmapped_keys, 1);
    assert_eq!(assembled.facts[0].keys.to_array(), [-1, 1, 1, 1, 1]);
}

#[test]
fn energy_rows_with_unmapped_keys_are_skipped_under_sentinel() {
    let ai = vec![ai_record("Spain", 2021, "Media", "Claude", "Strict", None)];
    let dims = build_dimensions(&[], &ai, &LookupTables::default());
    let energy = vec![
        energy_record("Spain", 2021, Some(5.0)),
        energy_record("Spain", 1999, Some(6.0)),
    ];

    let keyed = assign_energy_keys(&energy, &dims, UnmappedKeyPolicy::Sentinel).unwrap();

    assert_eq!(keyed.len(), 1);
    assert_eq!((keyed[0].country_id, keyed[0].date_id), (1, 1));
}

#[test]
fn join_fills_all_energy_measures_or_none() {
    let energy = vec![energy_record("Spain", 2021, Some(5.0))];
    let ai = vec![
        ai_record("Spain", 2021, "Media", "Claude", "Strict", Some(1.0)),
        ai_record("Spain", 2022, "Media", "Claude", "Strict", Some(1.0)),
    ];
    let dims = build_dimensions(&energy, &ai, &LookupTables::default());
    let keyed_ai = assign_foreign_keys(&ai, &dims, UnmappedKeyPolicy::Fail).unwrap();
    let keyed_energy = assign_energy_keys(&energy, &dims, UnmappedKeyPolicy::Fail).unwrap();

    let facts = join_energy(keyed_ai, &keyed_energy);

    assert!(facts[0].energy_matched);
    assert_eq!(facts[0].energy_measures[0], 5.0);
    // Null source measures on a matched row still become sentinels.
    assert_eq!(facts[0].energy_measures[1], SENTINEL);
    assert!(!facts[1].energy_matched);
    assert!(facts[1].energy_measures.iter().all(|v| *v == SENTINEL));
    assert_eq!(facts[1].ai_measures[0], SENTINEL);
    assert_eq!(facts[1].ai_measures[1], 1.0);
}

#[test]
fn first_energy_row_wins_on_duplicate_keys() {
    let energy = vec![
        energy_record("Spain", 2021, Some(5.0)),
        energy_record("Spain", 2021, Some(7.0)),
    ];
    let ai = vec![ai_record("Spain", 2021, "Media", "Claude", "Strict", None)];
    let dims = build_dimensions(&energy, &ai, &LookupTables::default());
    let keyed_ai = assign_foreign_keys(&ai, &dims, UnmappedKeyPolicy::Fail).unwrap();
    let keyed_energy = assign_energy_keys(&energy, &dims, UnmappedKeyPolicy::Fail).unwrap();

    let facts = join_energy(keyed_ai, &keyed_energy);

    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].energy_measures[0], 5.0);
}
