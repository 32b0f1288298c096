use std::collections::HashMap;

use anyhow::{Context as _, Result};
use cinedb_core::{CatalogItem, Rating, TransformedDataset};
use rusqlite::{Transaction, params};
use serde::Serialize;

use super::{Storage, lock_conn};

/// Row counts written by one [`Storage::load`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Genres newly inserted by this run
    pub genres_inserted: usize,
    /// Genres known after this run, pre-existing ones included
    pub genres_total: usize,
    /// Rows written with insert-or-replace. An item whose external id is
    /// taken over by a later item in the same run is counted but no longer
    /// present afterwards.
    pub items_written: usize,
    pub associations_inserted: usize,
    pub ratings_inserted: usize,
}

impl Storage {
    /// Write the whole dataset in one transaction.
    ///
    /// Genres and associations are insert-or-ignore, catalog items are
    /// insert-or-replace keyed on id, ratings are always appended.
    ///
    /// # Errors
    /// Returns error if any statement fails; the transaction is rolled back
    /// and nothing from this call is visible.
    pub fn load(&self, dataset: &TransformedDataset) -> Result<LoadSummary> {
        let mut conn = lock_conn(&self.conn)?;
        let tx = conn.transaction()?;

        let genres_inserted = insert_genres(&tx, &dataset.genres).context("inserting genres")?;
        let genre_ids = genre_ids(&tx).context("reading genre ids")?;
        let items_written = upsert_items(&tx, &dataset.items).context("writing catalog items")?;
        let associations_inserted =
            insert_item_genres(&tx, dataset, &genre_ids).context("linking item genres")?;
        let ratings_inserted =
            append_ratings(&tx, &dataset.ratings).context("appending ratings")?;

        tx.commit().context("committing load transaction")?;

        let summary = LoadSummary {
            genres_inserted,
            genres_total: genre_ids.len(),
            items_written,
            associations_inserted,
            ratings_inserted,
        };
        tracing::info!(
            genres_inserted,
            genres_total = summary.genres_total,
            items_written,
            associations_inserted,
            ratings_inserted,
            "Load committed"
        );
        Ok(summary)
    }
}

fn insert_genres(tx: &Transaction<'_>, genres: &[String]) -> rusqlite::Result<usize> {
    let mut stmt = tx.prepare_cached("INSERT OR IGNORE INTO genres (name) VALUES (?1)")?;
    let mut inserted = 0;
    for name in genres {
        inserted += stmt.execute(params![name])?;
    }
    Ok(inserted)
}

/// Full name → id map, including genres from earlier runs.
fn genre_ids(tx: &Transaction<'_>) -> rusqlite::Result<HashMap<String, i64>> {
    let mut stmt = tx.prepare("SELECT name, genre_id FROM genres WHERE name IS NOT NULL")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
    rows.collect()
}

fn upsert_items(tx: &Transaction<'_>, items: &[CatalogItem]) -> rusqlite::Result<usize> {
    let mut stmt = tx.prepare_cached(
        r#"INSERT OR REPLACE INTO catalog_items
           (item_id, title, external_id, year, plot, director, box_office)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
    )?;
    for item in items {
        stmt.execute(params![
            item.item_id,
            item.title,
            item.external_id,
            item.year,
            item.plot,
            item.director,
            item.box_office,
        ])?;
    }
    Ok(items.len())
}

fn insert_item_genres(
    tx: &Transaction<'_>,
    dataset: &TransformedDataset,
    genre_ids: &HashMap<String, i64>,
) -> rusqlite::Result<usize> {
    let mut stmt = tx.prepare_cached(
        "INSERT OR IGNORE INTO item_genres (item_id, genre_id) VALUES (?1, ?2)",
    )?;
    let mut inserted = 0;
    for (item_id, genres) in dataset.item_genres() {
        for name in genres {
            let Some(genre_id) = genre_ids.get(name) else {
                tracing::warn!(item_id, genre = %name, "Genre missing from lookup, skipping link");
                continue;
            };
            inserted += stmt.execute(params![item_id, genre_id])?;
        }
    }
    Ok(inserted)
}

fn append_ratings(tx: &Transaction<'_>, ratings: &[Rating]) -> rusqlite::Result<usize> {
    let mut stmt = tx.prepare_cached(
        "INSERT INTO ratings (user_id, item_id, rating, timestamp) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for rating in ratings {
        stmt.execute(params![rating.user_id, rating.item_id, rating.rating, rating.timestamp])?;
    }
    Ok(ratings.len())
}
