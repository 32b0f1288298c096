//! Catalog schema. Every statement is `IF NOT EXISTS`, so applying it to an
//! existing database is a no-op.

use rusqlite::Connection;

pub(crate) const SQL: &str = "
CREATE TABLE IF NOT EXISTS catalog_items (
    item_id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    external_id TEXT UNIQUE,
    year INTEGER,
    plot TEXT,
    director TEXT,
    box_office TEXT
);

CREATE TABLE IF NOT EXISTS genres (
    genre_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE
);

CREATE TABLE IF NOT EXISTS item_genres (
    item_id INTEGER REFERENCES catalog_items(item_id),
    genre_id INTEGER REFERENCES genres(genre_id),
    UNIQUE (item_id, genre_id)
);

CREATE TABLE IF NOT EXISTS ratings (
    rating_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    item_id INTEGER REFERENCES catalog_items(item_id),
    rating REAL,
    timestamp INTEGER
);

CREATE INDEX IF NOT EXISTS idx_ratings_item ON ratings(item_id);
";

/// Create the four catalog tables if they are missing.
pub fn ensure_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SQL)?;
    tracing::debug!("Catalog schema ensured");
    Ok(())
}
