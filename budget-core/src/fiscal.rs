//! Fiscal year spanning two calendar years, e.g. `2021-2022`.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear {
    start: u16,
    end: u16,
}

impl FiscalYear {
    /// Years are taken as written; `end == start + 1` is not enforced.
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Integer value of the first four characters of the label.
    pub fn start_year(&self) -> i32 {
        i32::from(self.start)
    }

    /// Parse a canonical `YYYY-YYYY` label.
    #[cfg(test)]
    pub(crate) fn parse(label: &str) -> Option<Self> {
        let (start, end) = label.split_once('-')?;
        if start.len() != 4 || end.len() != 4 {
            return None;
        }
        if !start.bytes().chain(end.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::new(start.parse().ok()?, end.parse().ok()?))
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.start, self.end)
    }
}

impl Serialize for FiscalYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
