use anyhow::Result;
use serde::Serialize;

use super::{Storage, lock_conn};

/// Row count of every catalog table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub catalog_items: i64,
    pub genres: i64,
    pub item_genres: i64,
    pub ratings: i64,
}

impl Storage {
    /// Count rows in each table.
    ///
    /// # Errors
    /// Returns error if any count query fails.
    pub fn table_counts(&self) -> Result<TableCounts> {
        let conn = lock_conn(&self.conn)?;
        let count = |table: &str| -> rusqlite::Result<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        };
        Ok(TableCounts {
            catalog_items: count("catalog_items")?,
            genres: count("genres")?,
            item_genres: count("item_genres")?,
            ratings: count("ratings")?,
        })
    }
}
