//! `SQLite` storage implementation
//!
//! All methods are synchronous; the pipeline calls them from a single task.

mod loader;
mod stats;

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::schema;

pub use loader::LoadSummary;
pub use stats::TableCounts;

/// Catalog database handle
#[derive(Debug)]
pub struct Storage {
    pub(crate) conn: Mutex<Connection>,
}

pub(crate) fn lock_conn<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(|e: PoisonError<_>| anyhow::anyhow!("Database lock poisoned: {}", e))
}

/// Connection settings applied before the schema.
///
/// The default rollback journal is kept so [`crate::QueryRunner`] can open the
/// file read-only without `-wal`/`-shm` side files. Foreign keys stay
/// unenforced: `INSERT OR REPLACE` on a catalog item that ratings already
/// reference must keep working on re-runs.
fn init_connection(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "busy_timeout", 5000i32)?;
    conn.pragma_update(None, "foreign_keys", "OFF")?;
    Ok(())
}

impl Storage {
    /// Open (or create) the database at `db_path` and ensure the schema exists.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or the schema cannot be created.
    pub fn new(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        init_connection(&conn)?;
        schema::ensure_schema(&conn)?;
        tracing::info!(path = %db_path.display(), "Storage initialized");
        Ok(Self { conn: Mutex::new(conn) })
    }
}
