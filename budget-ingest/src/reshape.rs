//! Wide-to-long reshape.
//!
//! Every (row, measure column) pair is a candidate. Candidates whose header
//! does not decode or whose cell is not a finite number are dropped and
//! counted. Output order is row-major, measure columns in declaration order.

use budget_core::{LongRecord, MeasureClassifier, MeasureHeader, RawCell, normalize_amount};
use tracing::{debug, info};

use crate::schema::IdentifierColumns;
use crate::types::RawTable;

/// Counters for discarded candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReshapeStats {
    pub candidates: usize,
    pub unmatched_header: usize,
    pub non_numeric: usize,
    pub kept: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reshaped {
    pub records: Vec<LongRecord>,
    pub stats: ReshapeStats,
}

pub fn reshape(
    table: &RawTable,
    ids: &IdentifierColumns,
    classifier: &MeasureClassifier,
) -> Reshaped {
    // headers are decoded once per column, not once per cell
    let measures: Vec<(usize, MeasureHeader)> = ids
        .measure_columns(table.column_count())
        .into_iter()
        .map(|i| (i, classifier.classify(&table.headers[i])))
        .collect();

    for (i, header) in &measures {
        if !header.is_matched() {
            debug!("unmatched measure header: {:?}", table.headers[*i]);
        }
    }

    let mut stats = ReshapeStats::default();
    let mut records = Vec::new();

    for row in &table.rows {
        let sector = text_at(row, Some(ids.category));
        let ministry = text_at(row, Some(ids.ministry));
        let scheme = text_at(row, ids.scheme);

        for (col, header) in &measures {
            stats.candidates += 1;

            let MeasureHeader::Matched {
                stage,
                fiscal_year,
                component,
            } = *header
            else {
                stats.unmatched_header += 1;
                continue;
            };

            let Some(allocation) = row.get(*col).and_then(normalize_amount) else {
                stats.non_numeric += 1;
                continue;
            };

            records.push(LongRecord {
                fiscal_year,
                start_year: fiscal_year.start_year(),
                stage,
                component,
                sector: sector.clone(),
                ministry: ministry.clone(),
                scheme: scheme.clone(),
                allocation,
            });
        }
    }

    stats.kept = records.len();
    info!(
        "reshaped {} candidates: kept {}, unmatched header {}, non-numeric {}",
        stats.candidates, stats.kept, stats.unmatched_header, stats.non_numeric
    );

    Reshaped { records, stats }
}

fn text_at(row: &[RawCell], index: Option<usize>) -> Option<String> {
    index.and_then(|i| row.get(i)).and_then(RawCell::as_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnNames, detect_schema};
    use budget_core::{Component, Stage};

    fn table(headers: &[&str], rows: &[&[Option<&str>]]) -> RawTable {
        let mut t = RawTable::new(headers.iter().map(|s| s.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|c| RawCell::from(*c)).collect());
        }
        t
    }

    fn run(t: &RawTable) -> Reshaped {
        let ids = detect_schema(&t.headers, &ColumnNames::default()).unwrap();
        reshape(t, &ids, &MeasureClassifier::new().unwrap())
    }

    #[test]
    fn test_basic_melt() {
        let t = table(
            &["Category", "Ministry/Department", "Budget Estimates 2021-2022 Total"],
            &[
                &[Some("Health"), Some("Min A"), Some("₹1,000 cr")],
                &[Some("Health"), Some("Min B"), Some("500")],
            ],
        );
        let out = run(&t);
        assert_eq!(out.records.len(), 2);
        assert_eq!(out.records[0].allocation, 1000.0);
        assert_eq!(out.records[1].allocation, 500.0);
        assert_eq!(out.records[0].stage, Stage::BudgetEstimates);
        assert_eq!(out.records[0].component, Component::Total);
        assert_eq!(out.records[0].start_year, 2021);
        assert_eq!(out.records[0].sector.as_deref(), Some("Health"));
        assert_eq!(out.records[1].ministry.as_deref(), Some("Min B"));
        assert_eq!(out.records[0].scheme, None);
    }

    #[test]
    fn test_order_is_row_major_and_discards_counted() {
        let t = table(
            &[
                "Sl.No.",
                "Category",
                "Ministry/Department",
                "Scheme",
                "Actuals 2020-2021 Total",
                "Notes",
                "Budget Estimates2021-2022 Capital",
            ],
            &[
                &[Some("1"), Some("Defence"), Some("MoD"), Some("S1"), Some("10"), Some("x"), Some("N/A")],
                &[Some("2"), Some("Health"), Some("MoH"), None, Some("20"), Some("y"), Some("30")],
            ],
        );
        let out = run(&t);
        let amounts: Vec<f64> = out.records.iter().map(|r| r.allocation).collect();
        assert_eq!(amounts, vec![10.0, 20.0, 30.0]);
        assert_eq!(out.records[0].scheme.as_deref(), Some("S1"));
        assert_eq!(out.records[2].component, Component::Capital);

        assert_eq!(out.stats.candidates, 6);
        assert_eq!(out.stats.unmatched_header, 2);
        assert_eq!(out.stats.non_numeric, 1);
        assert_eq!(out.stats.kept, 3);
    }

    #[test]
    fn test_row_count_bound_and_year_shape() {
        let t = table(
            &[
                "Category",
                "Ministry/Department",
                "Actuals 2019-2020 Revenue",
                "Revised Estimates 2020 - 2021",
            ],
            &[
                &[Some("A"), Some("M1"), Some("1"), Some("2")],
                &[Some("B"), Some("M2"), None, Some("bad")],
                &[None, Some("M3"), Some("3"), Some("4")],
            ],
        );
        let out = run(&t);
        assert!(out.records.len() <= t.row_count() * 2);
        for r in &out.records {
            let fy = r.fiscal_year.to_string();
            assert_eq!(fy.len(), 9);
            assert_eq!(&fy[4..5], "-");
            assert!(fy.chars().filter(|c| *c != '-').all(|c| c.is_ascii_digit()));
        }
        assert_eq!(out.records[1].fiscal_year.to_string(), "2020-2021");
    }

    #[test]
    fn test_missing_identifier_values_kept() {
        let t = table(
            &["Category", "Ministry/Department", "Actuals 2021-2022 Total"],
            &[&[None, Some("Min A"), Some("5")]],
        );
        let out = run(&t);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].sector, None);
    }
}
