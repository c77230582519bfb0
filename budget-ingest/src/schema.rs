//! Identifier-column detection.
//!
//! The only schema check performed: the category and ministry columns must
//! both be present. Scheme and serial number columns are optional.

use budget_core::{BudgetError, Result};
use serde::{Deserialize, Serialize};

/// Header names of the identifier columns in the source export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub category: String,
    pub ministry: String,
    pub scheme: String,
    pub serial_no: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            category: "Category".to_string(),
            ministry: "Ministry/Department".to_string(),
            scheme: "Scheme".to_string(),
            serial_no: "Sl.No.".to_string(),
        }
    }
}

/// Positions of the identifier columns found in a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierColumns {
    pub category: usize,
    pub ministry: usize,
    pub scheme: Option<usize>,
    pub serial_no: Option<usize>,
}

impl IdentifierColumns {
    /// Present identifier columns in preference order: category, ministry, scheme, serial no.
    pub fn indices(&self) -> Vec<usize> {
        let mut out = vec![self.category, self.ministry];
        out.extend(self.scheme);
        out.extend(self.serial_no);
        out
    }

    /// Every remaining column, in declaration order.
    pub fn measure_columns(&self, column_count: usize) -> Vec<usize> {
        let ids = self.indices();
        (0..column_count).filter(|i| !ids.contains(i)).collect()
    }
}

/// Locate identifier columns, failing when category or ministry is absent.
pub fn detect_schema(headers: &[String], names: &ColumnNames) -> Result<IdentifierColumns> {
    let find = |name: &str| headers.iter().position(|h| h == name);

    let category = find(&names.category);
    let ministry = find(&names.ministry);

    match (category, ministry) {
        (Some(category), Some(ministry)) => Ok(IdentifierColumns {
            category,
            ministry,
            scheme: find(&names.scheme),
            serial_no: find(&names.serial_no),
        }),
        _ => {
            let mut missing = Vec::new();
            if category.is_none() {
                missing.push(names.category.clone());
            }
            if ministry.is_none() {
                missing.push(names.ministry.clone());
            }
            Err(BudgetError::MissingIdentifierColumns {
                missing,
                found: headers.to_vec(),
            })
        }
    }
}
