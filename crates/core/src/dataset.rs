use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{CatalogItem, Rating};

/// Everything the loader writes in one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransformedDataset {
    pub items: Vec<CatalogItem>,
    /// Distinct genre names across all items, sorted
    pub genres: Vec<String>,
    pub ratings: Vec<Rating>,
}

impl TransformedDataset {
    #[must_use]
    pub fn new(items: Vec<CatalogItem>, ratings: Vec<Rating>) -> Self {
        let genres: BTreeSet<&str> =
            items.iter().flat_map(|item| item.genres.iter().map(String::as_str)).collect();
        let genres = genres.into_iter().map(str::to_owned).collect();
        Self { items, genres, ratings }
    }

    /// Genre names per item id. When the source repeats an id, the last row wins,
    /// matching the replace semantics of the item itself.
    #[must_use]
    pub fn item_genres(&self) -> BTreeMap<i64, &[String]> {
        let mut map = BTreeMap::new();
        for item in &self.items {
            map.insert(item.item_id, item.genres.as_slice());
        }
        map
    }
}
