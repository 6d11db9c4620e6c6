//! Frame builders shared by the integration tests.

#![allow(dead_code)]

use bi_model::columns::{COUNTRY, INDUSTRY, REGULATION_STATUS, TOP_AI_TOOL, YEAR};
use bi_model::{
    AI_MEASURES, AiContentRecord, AiMeasures, ENERGY_MEASURES, EnergyMeasures, EnergyRecord,
};
use polars::prelude::*;

/// An energy input row: country, year, total consumption.
pub type EnergyRow<'a> = (&'a str, i64, Option<f64>);

/// An AI-content input row: country, year, industry, tool, status, adoption rate.
pub type AiRow<'a> = (&'a str, i64, &'a str, &'a str, &'a str, Option<f64>);

/// Energy frame with every measure column; measures other than the total
/// hold the row index so a test can tell which row survived.
pub fn energy_frame(rows: &[EnergyRow<'_>]) -> DataFrame {
    let mut columns = vec![
        Series::new(COUNTRY.into(), rows.iter().map(|r| r.0).collect::<Vec<_>>()).into_column(),
        Series::new(YEAR.into(), rows.iter().map(|r| r.1).collect::<Vec<_>>()).into_column(),
        Series::new(
            ENERGY_MEASURES[0].source.into(),
            rows.iter().map(|r| r.2).collect::<Vec<_>>(),
        )
        .into_column(),
    ];
    for measure in &ENERGY_MEASURES[1..] {
        let values: Vec<f64> = (0..rows.len()).map(|idx| idx as f64).collect();
        columns.push(Series::new(measure.source.into(), values).into_column());
    }
    DataFrame::new(columns).unwrap()
}

/// AI-content frame with every measure column; measures other than the
/// adoption rate are fixed at 10.
pub fn ai_frame(rows: &[AiRow<'_>]) -> DataFrame {
    let mut columns = vec![
        Series::new(COUNTRY.into(), rows.iter().map(|r| r.0).collect::<Vec<_>>()).into_column(),
        Series::new(YEAR.into(), rows.iter().map(|r| r.1).collect::<Vec<_>>()).into_column(),
        Series::new(INDUSTRY.into(), rows.iter().map(|r| r.2).collect::<Vec<_>>()).into_column(),
        Series::new(TOP_AI_TOOL.into(), rows.iter().map(|r| r.3).collect::<Vec<_>>())
            .into_column(),
        Series::new(
            REGULATION_STATUS.into(),
            rows.iter().map(|r| r.4).collect::<Vec<_>>(),
        )
        .into_column(),
    ];
    for (idx, measure) in AI_MEASURES.iter().enumerate() {
        let values: Vec<Option<f64>> = if idx == 1 {
            rows.iter().map(|r| r.5).collect()
        } else {
            vec![Some(10.0); rows.len()]
        };
        columns.push(Series::new(measure.source.into(), values).into_column());
    }
    DataFrame::new(columns).unwrap()
}

pub fn energy_record(country: &str, year: i64, total: Option<f64>) -> EnergyRecord {
    EnergyRecord {
        country: country.to_string(),
        year,
        measures: EnergyMeasures {
            total_consumption_twh: total,
            ..EnergyMeasures::default()
        },
    }
}

pub fn ai_record(
    country: &str,
    year: i64,
    industry: &str,
    tool: &str,
    status: &str,
    adoption: Option<f64>,
) -> AiContentRecord {
    AiContentRecord {
        country: country.to_string(),
        year,
        industry: industry.to_string(),
        top_ai_tool: tool.to_string(),
        regulation_status: status.to_string(),
        measures: AiMeasures {
            adoption_rate_pct: adoption,
            ..AiMeasures::default()
        },
    }
}
