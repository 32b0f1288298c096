//! CSV extraction.

use std::path::Path;

use anyhow::{Context, Result};
use cinedb_core::{RawCatalogRow, RawRatingRow};
use serde::de::DeserializeOwned;

/// Read the catalog CSV (`movieId,title,genres`).
///
/// # Errors
/// Returns an error naming the file if the file cannot be read or a row
/// does not decode (for example a non-integer id).
pub fn read_catalog(path: &Path) -> Result<Vec<RawCatalogRow>> {
    read_rows(path)
}

/// Read the ratings CSV (`userId,movieId,rating[,timestamp]`).
///
/// # Errors
/// Returns an error naming the file if the file cannot be read or a row
/// does not decode. A non-numeric rating is not an error here.
pub fn read_ratings(path: &Path) -> Result<Vec<RawRatingRow>> {
    read_rows(path)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let rows = rdr
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .with_context(|| format!("Failed to read rows from {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Extracted CSV");
    Ok(rows)
}
