//! budget-core: domain types for the union budget reshaper

pub mod amount;
pub mod error;
pub mod fiscal;
pub mod measure;
pub mod records;

pub use amount::{RawCell, format_decimal, normalize_amount, normalize_amount_str, round2};
pub use error::{BudgetError, Result};
pub use fiscal::FiscalYear;
pub use measure::{Component, MeasureClassifier, MeasureHeader, Stage};
pub use records::{ForecastRecord, GroupBy, LongRecord, SummaryRecord};
