//! budget-report: yearly summaries, sector forecast and the published CSV tables

pub mod aggregate;
pub mod forecast;
pub mod pipeline;
pub mod writer;

pub use aggregate::summarize;
pub use forecast::forecast;
pub use pipeline::{BudgetTables, build_tables};
pub use writer::{OutputFiles, write_tables};
