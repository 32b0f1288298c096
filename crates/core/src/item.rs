//! Catalog items and the raw rows they are built from.

use serde::{Deserialize, Serialize};

use crate::transform::{parse_title_and_year, split_genres};

/// One row of the catalog CSV (`movieId,title,genres`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCatalogRow {
    #[serde(rename = "movieId")]
    pub item_id: i64,
    /// Composite title, usually `Name (YYYY)`
    pub title: String,
    /// Pipe-delimited genre names
    #[serde(default)]
    pub genres: Option<String>,
}

/// Fields merged into a catalog item from a successful metadata lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub plot: Option<String>,
    pub director: Option<String>,
    pub box_office: Option<String>,
    pub external_id: Option<String>,
}

/// Normalized, optionally enriched catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable primary key taken from the source dataset
    pub item_id: i64,
    /// Display title with the year suffix removed
    pub title: String,
    pub year: Option<i32>,
    /// External catalog identifier (IMDb id); unique when present
    pub external_id: Option<String>,
    pub plot: Option<String>,
    pub director: Option<String>,
    pub box_office: Option<String>,
    pub genres: Vec<String>,
}

impl CatalogItem {
    /// Build an item from a raw row. Enrichment fields stay `None` unless the
    /// metadata lookup succeeded.
    #[must_use]
    pub fn from_raw(row: &RawCatalogRow, enrichment: Option<Enrichment>) -> Self {
        let (title, year) = parse_title_and_year(&row.title);
        let enrichment = enrichment.unwrap_or_default();
        Self {
            item_id: row.item_id,
            title,
            year,
            external_id: enrichment.external_id,
            plot: enrichment.plot,
            director: enrichment.director,
            box_office: enrichment.box_office,
            genres: split_genres(row.genres.as_deref()),
        }
    }
}
