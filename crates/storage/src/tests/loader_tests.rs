use cinedb_core::TransformedDataset;
use rusqlite::params;

use super::{
    create_enriched_item, create_test_item, create_test_rating, create_test_storage,
    toy_story_dataset,
};
use crate::{LoadSummary, Storage, TableCounts};

fn item_row(storage: &Storage, id: i64) -> (String, Option<i32>, Option<String>, Option<String>) {
    let conn = storage.conn.lock().unwrap();
    conn.query_row(
        "SELECT title, year, external_id, director FROM catalog_items WHERE item_id = ?1",
        params![id],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
    )
    .unwrap()
}

fn genres_of(storage: &Storage, id: i64) -> Vec<String> {
    let conn = storage.conn.lock().unwrap();
    let mut stmt = conn
        .prepare(
            "SELECT g.name FROM item_genres ig JOIN genres g ON g.genre_id = ig.genre_id
             WHERE ig.item_id = ?1 ORDER BY g.name",
        )
        .unwrap();
    stmt.query_map(params![id], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<Vec<String>>>()
        .unwrap()
}

#[test]
fn toy_story_end_to_end() {
    let (storage, _temp_dir) = create_test_storage();
    let summary = storage.load(&toy_story_dataset()).unwrap();
    assert_eq!(
        summary,
        LoadSummary {
            genres_inserted: 2,
            genres_total: 2,
            items_written: 1,
            associations_inserted: 2,
            ratings_inserted: 1,
        }
    );

    assert_eq!(item_row(&storage, 1), ("Toy Story".to_owned(), Some(1995), None, None));
    assert_eq!(genres_of(&storage, 1), vec!["Adventure", "Animation"]);

    let conn = storage.conn.lock().unwrap();
    let (user_id, item_id, rating, timestamp): (i64, i64, f64, Option<i64>) = conn
        .query_row("SELECT user_id, item_id, rating, timestamp FROM ratings", [], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .unwrap();
    assert_eq!((user_id, item_id, timestamp), (1, 1, Some(978_300_760)));
    assert!((rating - 4.5).abs() < f64::EPSILON);
}

#[test]
fn rerun_overwrites_items_and_appends_ratings() {
    let (storage, _temp_dir) = create_test_storage();
    let dataset = toy_story_dataset();
    storage.load(&dataset).unwrap();
    let second = storage.load(&dataset).unwrap();

    assert_eq!(second.genres_inserted, 0);
    assert_eq!(second.associations_inserted, 0);
    assert_eq!(
        storage.table_counts().unwrap(),
        TableCounts { catalog_items: 1, genres: 2, item_genres: 2, ratings: 2 }
    );
}

#[test]
fn replace_overwrites_every_column() {
    let (storage, _temp_dir) = create_test_storage();
    let enriched = TransformedDataset::new(
        vec![create_enriched_item(1, "Heat (1995)", "Crime", "tt0113277")],
        Vec::new(),
    );
    storage.load(&enriched).unwrap();
    assert_eq!(
        item_row(&storage, 1),
        (
            "Heat".to_owned(),
            Some(1995),
            Some("tt0113277".to_owned()),
            Some("Some Director".to_owned())
        )
    );

    let plain = TransformedDataset::new(vec![create_test_item(1, "Heat (1996)", "Crime")], Vec::new());
    storage.load(&plain).unwrap();
    assert_eq!(item_row(&storage, 1), ("Heat".to_owned(), Some(1996), None, None));
}

#[test]
fn genre_lookup_includes_earlier_runs() {
    let (storage, _temp_dir) = create_test_storage();
    storage
        .load(&TransformedDataset::new(vec![create_test_item(1, "Heat (1995)", "Crime")], Vec::new()))
        .unwrap();

    let summary = storage
        .load(&TransformedDataset::new(
            vec![create_test_item(2, "Fargo (1996)", "Comedy|Crime")],
            Vec::new(),
        ))
        .unwrap();
    assert_eq!(summary.genres_inserted, 1);
    assert_eq!(summary.genres_total, 2);
    assert_eq!(genres_of(&storage, 2), vec!["Comedy", "Crime"]);
}

#[test]
fn items_without_genres_get_no_links() {
    let (storage, _temp_dir) = create_test_storage();
    let dataset = TransformedDataset::new(
        vec![create_test_item(9, "Untitled (2001)", "(no genres listed)")],
        vec![create_test_rating(3, 9, 2.0)],
    );
    let summary = storage.load(&dataset).unwrap();
    assert_eq!(summary.associations_inserted, 0);
    assert_eq!(
        storage.table_counts().unwrap(),
        TableCounts { catalog_items: 1, genres: 0, item_genres: 0, ratings: 1 }
    );
}

#[test]
fn failed_load_leaves_database_untouched() {
    let (storage, _temp_dir) = create_test_storage();
    storage.conn.lock().unwrap().execute_batch("DROP TABLE ratings").unwrap();

    let err = storage.load(&toy_story_dataset()).unwrap_err();
    assert!(format!("{err:#}").contains("appending ratings"));

    let conn = storage.conn.lock().unwrap();
    let count = |table: &str| -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0)).unwrap()
    };
    assert_eq!(count("catalog_items"), 0);
    assert_eq!(count("genres"), 0);
    assert_eq!(count("item_genres"), 0);
}

#[test]
fn storage_is_usable_after_rollback() {
    let (storage, temp_dir) = create_test_storage();
    storage.conn.lock().unwrap().execute_batch("DROP TABLE ratings").unwrap();
    assert!(storage.load(&toy_story_dataset()).is_err());
    drop(storage);

    let reopened = Storage::new(&temp_dir.path().join("test.db")).unwrap();
    reopened.load(&toy_story_dataset()).unwrap();
    assert_eq!(reopened.table_counts().unwrap().ratings, 1);
}

#[test]
fn genres_missing_from_lookup_are_not_linked() {
    let (storage, _temp_dir) = create_test_storage();
    let mut dataset = toy_story_dataset();
    dataset.genres.retain(|g| g != "Animation");

    let summary = storage.load(&dataset).unwrap();
    assert_eq!(summary.genres_inserted, 1);
    assert_eq!(summary.associations_inserted, 1);
    assert_eq!(genres_of(&storage, 1), vec!["Adventure"]);
    assert_eq!(
        storage.table_counts().unwrap(),
        TableCounts { catalog_items: 1, genres: 1, item_genres: 1, ratings: 1 }
    );
}

#[test]
fn shared_external_id_keeps_the_later_item() {
    let (storage, _temp_dir) = create_test_storage();
    let dataset = TransformedDataset::new(
        vec![
            create_enriched_item(1, "Heat (1995)", "Crime", "tt0113277"),
            create_enriched_item(2, "Heat (1986)", "Action", "tt0113277"),
        ],
        vec![create_test_rating(1, 1, 4.0)],
    );

    let summary = storage.load(&dataset).unwrap();
    assert_eq!(summary.items_written, 2);
    assert_eq!(item_row(&storage, 2).2.as_deref(), Some("tt0113277"));

    let counts = storage.table_counts().unwrap();
    assert_eq!(counts.catalog_items, 1);
    assert_eq!(counts.item_genres, 2);
    assert_eq!(counts.ratings, 1);
}
