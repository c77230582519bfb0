//! Deterministic decoding of measure column headers.
//!
//! Headers look like `Actuals 2021-2022 Total`,
//! `Budget Estimates2023-2024 Capital` or `Revised Estimates2022-2023`.
//! This is a keyword heuristic, not a grammar: each fact is decided by the
//! first matching rule in a fixed priority list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::fiscal::FiscalYear;

/// Budgeting phase a figure belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stage {
    #[serde(rename = "Actuals")]
    Actuals,
    #[serde(rename = "Budget Estimates")]
    BudgetEstimates,
    #[serde(rename = "Revised Estimates")]
    RevisedEstimates,
    #[serde(rename = "Other")]
    Other,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Actuals => "Actuals",
            Stage::BudgetEstimates => "Budget Estimates",
            Stage::RevisedEstimates => "Revised Estimates",
            Stage::Other => "Other",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expenditure category within a figure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Component {
    Revenue,
    Capital,
    Total,
    Value,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Component::Revenue => "Revenue",
            Component::Capital => "Capital",
            Component::Total => "Total",
            Component::Value => "Value",
        };
        f.write_str(s)
    }
}

/// Result of classifying one header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureHeader {
    Matched {
        stage: Stage,
        fiscal_year: FiscalYear,
        component: Component,
    },
    Unmatched,
}

impl MeasureHeader {
    pub fn is_matched(&self) -> bool {
        matches!(self, MeasureHeader::Matched { .. })
    }
}

/// Stage is decided by prefix only. No word boundary is required, so
/// `Actualsx2021-2022` still reads as Actuals.
const STAGE_RULES: &[(&str, Stage)] = &[
    ("actuals", Stage::Actuals),
    ("budget estimates", Stage::BudgetEstimates),
    ("revised estimates", Stage::RevisedEstimates),
];

/// Component is decided by substring anywhere in the header.
const COMPONENT_RULES: &[(&str, Component)] = &[
    ("revenue", Component::Revenue),
    ("capital", Component::Capital),
    ("total", Component::Total),
];

const FISCAL_YEAR_PATTERN: &str = r"(20\d{2})\s*-\s*(20\d{2})";

pub struct MeasureClassifier {
    fiscal_year: Regex,
}

impl MeasureClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fiscal_year: Regex::new(FISCAL_YEAR_PATTERN)?,
        })
    }

    /// Decode a raw header into (stage, fiscal year, component).
    pub fn classify(&self, header: &str) -> MeasureHeader {
        let normalized = normalize_whitespace(header);

        let Some(fiscal_year) = self.find_fiscal_year(&normalized) else {
            return MeasureHeader::Unmatched;
        };

        let lower = normalized.to_lowercase();
        MeasureHeader::Matched {
            stage: stage_for(&lower),
            fiscal_year,
            component: component_for(&lower),
        }
    }

    fn find_fiscal_year(&self, header: &str) -> Option<FiscalYear> {
        let caps = self.fiscal_year.captures(header)?;
        let start = caps[1].parse().ok()?;
        let end = caps[2].parse().ok()?;
        Some(FiscalYear::new(start, end))
    }
}

/// Newlines become spaces, whitespace runs collapse to one space, ends trimmed.
pub fn normalize_whitespace(header: &str) -> String {
    header.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn stage_for(lower: &str) -> Stage {
    STAGE_RULES
        .iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map(|(_, stage)| *stage)
        .unwrap_or(Stage::Other)
}

fn component_for(lower: &str) -> Component {
    COMPONENT_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, component)| *component)
        .unwrap_or(Component::Value)
}
