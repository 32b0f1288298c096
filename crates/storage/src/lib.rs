//! Storage layer for cinedb
//!
//! SQLite-backed catalog schema, the all-or-nothing loader, and a read-only
//! runner for ad-hoc SQL reports.

mod report;
mod schema;
mod storage;
#[cfg(test)]
mod tests;

pub use report::{QueryOutput, QueryRunner, StatementOutcome, StatementReport, split_statements, statement_preview};
pub use schema::ensure_schema;
pub use storage::{LoadSummary, Storage, TableCounts};
