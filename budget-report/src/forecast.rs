//! Naive next-year projection of each sector's Budget Estimates total.
//!
//! With two or more years the last first-difference is carried forward:
//! `last + (last - previous)`. A single year is carried forward unchanged.

use budget_core::{ForecastRecord, Stage, SummaryRecord, round2};
use std::collections::BTreeMap;

/// Project from sector summary rows. Rows without a sector are ignored.
/// Output is sorted by predicted allocation, descending.
pub fn forecast(sector_summary: &[SummaryRecord]) -> Vec<ForecastRecord> {
    let mut by_sector: BTreeMap<&str, Vec<(i32, f64)>> = BTreeMap::new();
    for s in sector_summary
        .iter()
        .filter(|s| s.stage == Stage::BudgetEstimates)
    {
        if let Some(sector) = s.key.as_deref() {
            by_sector
                .entry(sector)
                .or_default()
                .push((s.start_year, s.total));
        }
    }

    let mut out: Vec<ForecastRecord> = by_sector
        .into_iter()
        .filter_map(|(sector, mut points)| {
            points.sort_by_key(|(year, _)| *year);
            project(sector, &points)
        })
        .collect();

    out.sort_by(|a, b| b.predicted.total_cmp(&a.predicted));
    out
}

fn project(sector: &str, points: &[(i32, f64)]) -> Option<ForecastRecord> {
    let &(last_year, last) = points.last()?;
    let predicted = match points.len() {
        1 => last,
        n => {
            let (_, previous) = points[n - 2];
            last + (last - previous)
        }
    };

    Some(ForecastRecord {
        sector: sector.to_string(),
        next_start_year: last_year + 1,
        predicted: round2(predicted),
        last_known: round2(last),
        years_used: points.len(),
    })
}
