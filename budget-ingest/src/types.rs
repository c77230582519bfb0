use budget_core::RawCell;

/// Wide input table held fully in memory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with missing cells and dropping
    /// cells beyond the header width.
    pub fn push_row(&mut self, mut cells: Vec<RawCell>) {
        cells.resize(self.headers.len(), RawCell::Missing);
        self.rows.push(cells);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_pads_and_truncates() {
        let mut t = RawTable::new(vec!["A".into(), "B".into()]);
        t.push_row(vec![RawCell::from("1")]);
        t.push_row(vec!["1".into(), "2".into(), "3".into()]);
        assert_eq!(t.rows[0], vec![RawCell::from("1"), RawCell::Missing]);
        assert_eq!(t.rows[1].len(), 2);
        assert_eq!(t.row_count(), 2);
    }
}
