//! Read-only execution of SQL report scripts.
//!
//! A script is split on `;`, each statement runs on its own, and a failing
//! statement is recorded without stopping the ones after it.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context as _, Result};
use cinedb_core::constants::{REPORT_ROW_LIMIT, STATEMENT_PREVIEW_WORDS};
use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde::Serialize;

static STATEMENT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*").expect("static regex is valid"));

/// Columns and the leading rows of one statement's result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    /// At most `REPORT_ROW_LIMIT` rows, values rendered as text
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

impl QueryOutput {
    /// Rows produced but not kept.
    #[must_use]
    pub const fn omitted_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.rows.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatementOutcome {
    Rows(QueryOutput),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementReport {
    /// 1-based position in the script
    pub index: usize,
    pub sql: String,
    pub preview: String,
    pub outcome: StatementOutcome,
}

/// Read-only connection used by `cinedb query`.
#[derive(Debug)]
pub struct QueryRunner {
    conn: Connection,
}

impl QueryRunner {
    /// Open an existing database read-only.
    ///
    /// # Errors
    /// Returns error if the database does not exist or cannot be opened.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("opening {} read-only", db_path.display()))?;
        Ok(Self { conn })
    }

    /// Read a script file and run every statement in it.
    ///
    /// # Errors
    /// Returns error only if the script cannot be read; statement failures
    /// are reported per statement.
    pub fn run_file(&self, sql_file: &Path) -> Result<Vec<StatementReport>> {
        let script = std::fs::read_to_string(sql_file)
            .with_context(|| format!("reading SQL script {}", sql_file.display()))?;
        Ok(self.run_script(&script))
    }

    #[must_use]
    pub fn run_script(&self, script: &str) -> Vec<StatementReport> {
        split_statements(script)
            .into_iter()
            .enumerate()
            .map(|(i, sql)| {
                let outcome = match self.execute(&sql) {
                    Ok(output) => StatementOutcome::Rows(output),
                    Err(e) => {
                        tracing::warn!(statement = i + 1, error = %e, "Statement failed");
                        StatementOutcome::Failed { error: e.to_string() }
                    },
                };
                StatementReport { index: i + 1, preview: statement_preview(&sql), sql, outcome }
            })
            .collect()
    }

    fn execute(&self, sql: &str) -> rusqlite::Result<QueryOutput> {
        // SQLite prepares no statement at all for comment-only text.
        if is_comment_only(sql) {
            return Ok(QueryOutput::default());
        }
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(str::to_owned).collect();
        let column_count = columns.len();

        let mut rows = stmt.query([])?;
        let mut kept = Vec::new();
        let mut total_rows = 0;
        while let Some(row) = rows.next()? {
            if kept.len() < REPORT_ROW_LIMIT {
                let values = (0..column_count)
                    .map(|i| row.get_ref(i).map(render_value))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                kept.push(values);
            }
            total_rows += 1;
        }
        Ok(QueryOutput { columns, rows: kept, total_rows })
    }
}

/// Split a script on `;` plus trailing whitespace, dropping empty statements.
#[must_use]
pub fn split_statements(script: &str) -> Vec<String> {
    STATEMENT_SEPARATOR
        .split(script)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// First words of a statement on one line, with `...` when cut.
#[must_use]
pub fn statement_preview(sql: &str) -> String {
    let words: Vec<&str> = sql.split_whitespace().collect();
    let mut preview = words.iter().take(STATEMENT_PREVIEW_WORDS).copied().collect::<Vec<_>>().join(" ");
    if words.len() > STATEMENT_PREVIEW_WORDS {
        preview.push_str("...");
    }
    preview
}

/// True when `sql` holds nothing but whitespace, `--` and `/* */` comments.
fn is_comment_only(sql: &str) -> bool {
    let mut rest = sql.trim_start();
    loop {
        if rest.is_empty() {
            return true;
        }
        if let Some(line) = rest.strip_prefix("--") {
            rest = line.split_once('\n').map_or("", |(_, after)| after);
        } else if let Some(block) = rest.strip_prefix("/*") {
            rest = block.split_once("*/").map_or("", |(_, after)| after);
        } else {
            return false;
        }
        rest = rest.trim_start();
    }
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.1}"),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<blob {} bytes>", bytes.len()),
    }
}
