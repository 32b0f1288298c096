//! Test utilities and module declarations for storage tests.

use crate::Storage;
use cinedb_core::{CatalogItem, Enrichment, Rating, RawCatalogRow, TransformedDataset};
use tempfile::TempDir;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_item(id: i64, title: &str, genres: &str) -> CatalogItem {
    let row = RawCatalogRow { item_id: id, title: title.to_owned(), genres: Some(genres.to_owned()) };
    CatalogItem::from_raw(&row, None)
}

pub fn create_enriched_item(id: i64, title: &str, genres: &str, imdb_id: &str) -> CatalogItem {
    let row = RawCatalogRow { item_id: id, title: title.to_owned(), genres: Some(genres.to_owned()) };
    let enrichment = Enrichment {
        plot: Some(format!("Plot of {title}")),
        director: Some("Some Director".to_owned()),
        box_office: Some("$1,000".to_owned()),
        external_id: Some(imdb_id.to_owned()),
    };
    CatalogItem::from_raw(&row, Some(enrichment))
}

pub const fn create_test_rating(user_id: i64, item_id: i64, rating: f64) -> Rating {
    Rating { user_id, item_id, rating, timestamp: Some(978_300_760) }
}

/// The single-row catalog used by the end-to-end checks.
pub fn toy_story_dataset() -> TransformedDataset {
    TransformedDataset::new(
        vec![create_test_item(1, "Toy Story (1995)", "Adventure|Animation")],
        vec![create_test_rating(1, 1, 4.5)],
    )
}

mod loader_tests;
mod schema_tests;
