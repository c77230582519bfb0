//! Pure pipeline: raw table in, four tables out. No filesystem access.

use budget_core::{ForecastRecord, GroupBy, LongRecord, MeasureClassifier, Result, SummaryRecord};
use budget_ingest::{ColumnNames, RawTable, ReshapeStats, detect_schema, reshape};
use tracing::info;

use crate::aggregate::summarize;
use crate::forecast::forecast;

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTables {
    pub clean: Vec<LongRecord>,
    pub sector_year: Vec<SummaryRecord>,
    pub ministry_year: Vec<SummaryRecord>,
    pub forecast: Vec<ForecastRecord>,
    pub stats: ReshapeStats,
}

/// Detect identifier columns, reshape, summarize and forecast.
///
/// Fails only when the identifier columns are missing.
pub fn build_tables(table: &RawTable, names: &ColumnNames) -> Result<BudgetTables> {
    let ids = detect_schema(&table.headers, names)?;
    let classifier = MeasureClassifier::new()?;

    let reshaped = reshape(table, &ids, &classifier);
    let sector_year = summarize(&reshaped.records, GroupBy::Sector);
    let ministry_year = summarize(&reshaped.records, GroupBy::Ministry);
    let forecast = forecast(&sector_year);

    info!(
        "built tables: {} clean rows, {} sector-year, {} ministry-year, {} forecasts",
        reshaped.records.len(),
        sector_year.len(),
        ministry_year.len(),
        forecast.len()
    );

    Ok(BudgetTables {
        clean: reshaped.records,
        sector_year,
        ministry_year,
        forecast,
        stats: reshaped.stats,
    })
}
