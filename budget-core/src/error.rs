use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("missing identifier columns {missing:?} (columns found: {found:?})")]
    MissingIdentifierColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
