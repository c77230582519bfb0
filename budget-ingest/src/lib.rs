//! budget-ingest: raw table reading, identifier-column detection and the wide-to-long reshape.

pub mod reader;
pub mod reshape;
pub mod schema;
pub mod types;

pub use reader::{read_raw_table, read_raw_table_from_reader};
pub use reshape::{ReshapeStats, Reshaped, reshape};
pub use schema::{ColumnNames, IdentifierColumns, detect_schema};
pub use types::RawTable;
