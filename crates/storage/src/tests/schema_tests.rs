use super::create_test_storage;
use crate::{Storage, TableCounts, ensure_schema};

fn table_names(storage: &Storage) -> Vec<String> {
    let conn = storage.conn.lock().unwrap();
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .unwrap();
    stmt.query_map([], |row| row.get(0)).unwrap().collect::<rusqlite::Result<Vec<String>>>().unwrap()
}

#[test]
fn creates_four_tables() {
    let (storage, _temp_dir) = create_test_storage();
    assert_eq!(table_names(&storage), vec!["catalog_items", "genres", "item_genres", "ratings"]);
    assert_eq!(storage.table_counts().unwrap(), TableCounts::default());
}

#[test]
fn reopening_existing_database_keeps_data() {
    let (storage, temp_dir) = create_test_storage();
    storage.load(&super::toy_story_dataset()).unwrap();
    drop(storage);

    let reopened = Storage::new(&temp_dir.path().join("test.db")).unwrap();
    let counts = reopened.table_counts().unwrap();
    assert_eq!(counts.catalog_items, 1);
    assert_eq!(counts.ratings, 1);
}

#[test]
fn ensure_schema_twice_is_noop() {
    let (storage, _temp_dir) = create_test_storage();
    let conn = storage.conn.lock().unwrap();
    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();
}

#[test]
fn external_id_is_unique() {
    let (storage, _temp_dir) = create_test_storage();
    let conn = storage.conn.lock().unwrap();
    conn.execute(
        "INSERT INTO catalog_items (item_id, title, external_id) VALUES (1, 'A', 'tt1')",
        [],
    )
    .unwrap();
    let err = conn.execute(
        "INSERT INTO catalog_items (item_id, title, external_id) VALUES (2, 'B', 'tt1')",
        [],
    );
    assert!(err.is_err());
    conn.execute(
        "INSERT INTO catalog_items (item_id, title, external_id) VALUES (3, 'C', NULL), (4, 'D', NULL)",
        [],
    )
    .unwrap();
}
