//! Sector and ministry yearly totals over `Total` component rows.

use budget_core::{Component, FiscalYear, GroupBy, LongRecord, Stage, SummaryRecord};
use std::collections::HashMap;

type GroupKey<'a> = (i32, FiscalYear, Stage, Option<&'a str>);

/// Sum `Total` allocations per (start year, FY, stage, key).
///
/// Missing keys form their own group. Sorted by start year ascending, then
/// total descending; ties keep the order groups were first seen.
pub fn summarize(records: &[LongRecord], group_by: GroupBy) -> Vec<SummaryRecord> {
    let mut index: HashMap<GroupKey<'_>, usize> = HashMap::new();
    let mut out: Vec<SummaryRecord> = Vec::new();
    let mut sums: Vec<CompensatedSum> = Vec::new();

    for r in records.iter().filter(|r| r.component == Component::Total) {
        let key = group_by.key_of(r);
        let slot = *index
            .entry((r.start_year, r.fiscal_year, r.stage, key))
            .or_insert_with(|| {
                out.push(SummaryRecord {
                    start_year: r.start_year,
                    fiscal_year: r.fiscal_year,
                    stage: r.stage,
                    key: key.map(String::from),
                    total: 0.0,
                });
                sums.push(CompensatedSum::default());
                out.len() - 1
            });
        sums[slot].add(r.allocation);
    }

    for (record, sum) in out.iter_mut().zip(&sums) {
        record.total = sum.total;
    }

    out.sort_by(|a, b| {
        a.start_year
            .cmp(&b.start_year)
            .then_with(|| b.total.total_cmp(&a.total))
    });
    out
}

/// Kahan running sum, so decimal crore figures such as ten `0.1` rows add
/// up to exactly `1.0`.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum {
    total: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.total + y;
        self.compensation = (t - self.total) - y;
        self.total = t;
    }
}
