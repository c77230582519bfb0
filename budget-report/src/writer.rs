//! Persist the four published tables as CSV.
//!
//! A header row is always written, so empty tables still produce a file
//! with column names. The caller creates the output directory.

use budget_core::{GroupBy, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::pipeline::BudgetTables;

pub const CLEAN_FILE: &str = "union_budget_clean.csv";
pub const SECTOR_YEAR_FILE: &str = "sector_year_summary.csv";
pub const MINISTRY_YEAR_FILE: &str = "ministry_year_summary.csv";
pub const FORECAST_FILE: &str = "sector_forecast.csv";

pub const CLEAN_COLUMNS: &[&str] = &[
    "FY",
    "FY_StartYear",
    "Stage",
    "Component",
    "Sector",
    "Ministry",
    "Scheme",
    "Allocation_Cr",
];

pub const FORECAST_COLUMNS: &[&str] = &[
    "Sector",
    "Next_FY_StartYear",
    "Predicted_Allocation_Cr",
    "LastKnown_Allocation_Cr",
    "Years_Used",
];

pub fn summary_columns(group_by: GroupBy) -> [&'static str; 5] {
    ["FY_StartYear", "FY", "Stage", group_by.column(), "Allocation_Cr"]
}

/// Paths of the written tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub clean: PathBuf,
    pub sector_year: PathBuf,
    pub ministry_year: PathBuf,
    pub forecast: PathBuf,
}

impl OutputFiles {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            clean: dir.join(CLEAN_FILE),
            sector_year: dir.join(SECTOR_YEAR_FILE),
            ministry_year: dir.join(MINISTRY_YEAR_FILE),
            forecast: dir.join(FORECAST_FILE),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            &self.clean,
            &self.sector_year,
            &self.ministry_year,
            &self.forecast,
        ]
    }
}

pub fn write_tables(dir: &Path, tables: &BudgetTables) -> Result<OutputFiles> {
    let files = OutputFiles::in_dir(dir);

    write_csv(&files.clean, CLEAN_COLUMNS, &tables.clean)?;
    write_csv(
        &files.sector_year,
        &summary_columns(GroupBy::Sector),
        &tables.sector_year,
    )?;
    write_csv(
        &files.ministry_year,
        &summary_columns(GroupBy::Ministry),
        &tables.ministry_year,
    )?;
    write_csv(&files.forecast, FORECAST_COLUMNS, &tables.forecast)?;

    Ok(files)
}

fn write_csv<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(columns)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    info!("saved {} ({} rows)", path.display(), rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::build_tables;
    use budget_core::RawCell;
    use budget_ingest::{ColumnNames, RawTable};
    use std::fs;

    fn sample() -> BudgetTables {
        let mut t = RawTable::new(
            ["Category", "Ministry/Department", "Scheme", "Budget Estimates 2021-2022 Total"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        t.push_row(vec!["Health".into(), "Min A".into(), RawCell::Missing, "₹1,000 cr".into()]);
        t.push_row(vec!["Health".into(), "Min B".into(), "S2".into(), "500".into()]);
        build_tables(&t, &ColumnNames::default()).unwrap()
    }

    #[test]
    fn test_writes_expected_csv_text() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_tables(dir.path(), &sample()).unwrap();

        let clean = fs::read_to_string(&files.clean).unwrap();
        assert_eq!(
            clean,
            "FY,FY_StartYear,Stage,Component,Sector,Ministry,Scheme,Allocation_Cr\n\
             2021-2022,2021,Budget Estimates,Total,Health,Min A,,1000.0\n\
             2021-2022,2021,Budget Estimates,Total,Health,Min B,S2,500.0\n"
        );

        let sector = fs::read_to_string(&files.sector_year).unwrap();
        assert_eq!(
            sector,
            "FY_StartYear,FY,Stage,Sector,Allocation_Cr\n\
             2021,2021-2022,Budget Estimates,Health,1500.0\n"
        );

        let ministry = fs::read_to_string(&files.ministry_year).unwrap();
        assert!(ministry.starts_with("FY_StartYear,FY,Stage,Ministry,Allocation_Cr\n"));
        assert_eq!(ministry.lines().count(), 3);

        let forecast = fs::read_to_string(&files.forecast).unwrap();
        assert_eq!(
            forecast,
            "Sector,Next_FY_StartYear,Predicted_Allocation_Cr,LastKnown_Allocation_Cr,Years_Used\n\
             Health,2022,1500.0,1500.0,1\n"
        );
    }

    #[test]
    fn test_empty_tables_still_have_headers() {
        let dir = tempfile::tempdir().unwrap();
        let empty = BudgetTables {
            clean: vec![],
            sector_year: vec![],
            ministry_year: vec![],
            forecast: vec![],
            stats: Default::default(),
        };
        let files = write_tables(dir.path(), &empty).unwrap();
        for path in files.all() {
            let text = fs::read_to_string(path).unwrap();
            assert_eq!(text.lines().count(), 1, "{}", path.display());
        }
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let tables = sample();
        let files = write_tables(dir.path(), &tables).unwrap();
        let first: Vec<Vec<u8>> = files.all().iter().map(|p| fs::read(p).unwrap()).collect();

        write_tables(dir.path(), &tables).unwrap();
        let second: Vec<Vec<u8>> = files.all().iter().map(|p| fs::read(p).unwrap()).collect();
        assert_eq!(first, second);
    }
}
