//! Output records. Field order matches the column order of the published tables.

use serde::Serialize;

use crate::amount::serialize_decimal;
use crate::fiscal::FiscalYear;
use crate::measure::{Component, Stage};

/// One measure value of one budget line item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRecord {
    #[serde(rename = "FY")]
    pub fiscal_year: FiscalYear,
    #[serde(rename = "FY_StartYear")]
    pub start_year: i32,
    #[serde(rename = "Stage")]
    pub stage: Stage,
    #[serde(rename = "Component")]
    pub component: Component,
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    #[serde(rename = "Ministry")]
    pub ministry: Option<String>,
    #[serde(rename = "Scheme")]
    pub scheme: Option<String>,
    /// Always finite
    #[serde(rename = "Allocation_Cr", serialize_with = "serialize_decimal")]
    pub allocation: f64,
}

/// Which identifier a summary is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Sector,
    Ministry,
}

impl GroupBy {
    pub fn column(&self) -> &'static str {
        match self {
            GroupBy::Sector => "Sector",
            GroupBy::Ministry => "Ministry",
        }
    }

    pub fn key_of<'a>(&self, record: &'a LongRecord) -> Option<&'a str> {
        match self {
            GroupBy::Sector => record.sector.as_deref(),
            GroupBy::Ministry => record.ministry.as_deref(),
        }
    }
}

/// Yearly total of one sector or ministry at one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub start_year: i32,
    pub fiscal_year: FiscalYear,
    pub stage: Stage,
    pub key: Option<String>,
    #[serde(serialize_with = "serialize_decimal")]
    pub total: f64,
}

/// Next-year projection for one sector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRecord {
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Next_FY_StartYear")]
    pub next_start_year: i32,
    #[serde(rename = "Predicted_Allocation_Cr", serialize_with = "serialize_decimal")]
    pub predicted: f64,
    #[serde(rename = "LastKnown_Allocation_Cr", serialize_with = "serialize_decimal")]
    pub last_known: f64,
    #[serde(rename = "Years_Used")]
    pub years_used: usize,
}
