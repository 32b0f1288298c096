use anyhow::{Result, ensure};
use cinedb_storage::Storage;
use std::path::Path;

pub(crate) fn run_stats(db_path: &Path) -> Result<()> {
    ensure!(db_path.exists(), "database {} does not exist", db_path.display());
    let storage = Storage::new(db_path)?;
    let counts = storage.table_counts()?;
    println!("{}", serde_json::to_string_pretty(&counts)?);
    Ok(())
}
