//! Tests for star-schema export.

use std::fs;

use bi_model::{AI_MEASURES, ENERGY_MEASURES, LookupTables, PipelineOptions};
use bi_output::{MANIFEST_FILE, file_sha256, read_manifest, write_star_schema};
use bi_transform::{StarSchema, build_star_schema};
use polars::prelude::*;
use tempfile::TempDir;

fn text(name: &str, values: &[&str]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

fn ints(name: &str, values: &[i64]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

fn floats(name: &str, values: &[f64]) -> Column {
    Series::new(name.into(), values.to_vec()).into_column()
}

fn sample_schema() -> StarSchema {
    let mut energy_columns = vec![
        text("Country", &["South Korea", "Germany"]),
        ints("Year", &[2020, 1995]),
    ];
    for measure in &ENERGY_MEASURES {
        energy_columns.push(floats(measure.source, &[120.5, 50.0]));
    }
    let energy = DataFrame::new(energy_columns).unwrap();

    let mut ai_columns = vec![
        text("Country", &["Korea, South", "Korea, South"]),
        ints("Year", &[2020, 2020]),
        text("Industry", &["Media", "Media"]),
        text("Top AI Tools Used", &["ChatGPT", "ChatGPT"]),
        text("Regulation Status", &["Strict", "Strict"]),
    ];
    for measure in &AI_MEASURES {
        ai_columns.push(floats(measure.source, &[40.0, 60.0]));
    }
    let ai = DataFrame::new(ai_columns).unwrap();

    build_star_schema(
        &energy,
        &ai,
        &LookupTables::default(),
        &PipelineOptions::default(),
    )
    .unwrap()
}

#[test]
fn writes_every_table_and_manifest() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("output");

    let result = write_star_schema(&output_dir, &sample_schema()).unwrap();

    let files: Vec<&str> = result
        .manifest
        .tables
        .iter()
        .map(|entry| entry.file.as_str())
        .collect();
    assert_eq!(
        files,
        vec![
            "fact_final.csv",
            "dim_country.csv",
            "dim_industry.csv",
            "dim_date.csv",
            "dim_regulation_status.csv",
            "dim_top_ai_tool.csv"
        ]
    );
    for entry in &result.manifest.tables {
        let path = output_dir.join(&entry.file);
        assert!(path.is_file(), "{} missing", entry.file);
        assert_eq!(file_sha256(&path).unwrap(), entry.sha256);
    }

    let manifest = read_manifest(&output_dir.join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest, result.manifest);
    assert_eq!(manifest.entry("dim_country").unwrap().rows, 2);
    assert_eq!(manifest.entry("fact_final").unwrap().rows, 1);
}

#[test]
fn dimension_csv_matches_snapshot() {
    let dir = TempDir::new().unwrap();
    write_star_schema(dir.path(), &sample_schema()).unwrap();

    let dim_date = fs::read_to_string(dir.path().join("dim_date.csv")).unwrap();
    insta::assert_snapshot!(dim_date, @r"
    Year,Date_ID,Decade
    2020,1,2020s
    1995,2,1990s
    ");

    let dim_country = fs::read_to_string(dir.path().join("dim_country.csv")).unwrap();
    insta::assert_snapshot!(dim_country, @r#"
    Country,Country_ID,Region
    "Korea, South",1,Asia
    Germany,2,Europe
    "#);
}

#[test]
fn fact_csv_writes_numbers_without_trailing_zeros() {
    let dir = TempDir::new().unwrap();
    write_star_schema(dir.path(), &sample_schema()).unwrap();

    let fact = fs::read_to_string(dir.path().join("fact_final.csv")).unwrap();
    let mut lines = fact.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Country_ID,Date_ID,Industry_ID,Regulation_ID,Tool_ID,"));
    assert_eq!(
        lines.next().unwrap(),
        "1,1,1,1,1,50,50,50,50,50,50,120.5,120.5,120.5,120.5,120.5,120.5,120.5,120.5"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn rerun_produces_identical_files() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = write_star_schema(first.path(), &sample_schema()).unwrap();
    let b = write_star_schema(second.path(), &sample_schema()).unwrap();

    assert_eq!(a.manifest, b.manifest);
    let manifest_a = fs::read(first.path().join(MANIFEST_FILE)).unwrap();
    let manifest_b = fs::read(second.path().join(MANIFEST_FILE)).unwrap();
    assert_eq!(manifest_a, manifest_b);
}
