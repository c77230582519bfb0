//! Read the budget CSV export into a [`RawTable`].
//!
//! Headers are kept verbatim, including embedded newlines from quoted cells.
//! Empty fields and the usual spreadsheet null markers become
//! [`RawCell::Missing`]; everything else stays text until normalization.

use budget_core::{BudgetError, RawCell, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::types::RawTable;

/// Field values treated as missing.
const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load the input file. A missing file is fatal.
pub fn read_raw_table(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(BudgetError::InputNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    let table = read_raw_table_from_reader(file)?;
    info!(
        "loaded {}: {} rows, {} columns",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

pub fn read_raw_table_from_reader(input: impl Read) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(input);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut table = RawTable::new(headers);

    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        table.push_row(record.iter().map(to_cell).collect());
    }

    Ok(table)
}

fn to_cell(field: &str) -> RawCell {
    if NULL_TOKENS.contains(&field) {
        RawCell::Missing
    } else {
        RawCell::Text(field.to_string())
    }
}
