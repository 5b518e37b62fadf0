use rusqlite::Connection;
use shops_core::db::schema::{stored_schema_version, LATEST_SCHEMA_VERSION};
use shops_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_creates_both_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(stored_schema_version(&conn).unwrap(), LATEST_SCHEMA_VERSION);
    assert_table_exists(&conn, "shops");
    assert_table_exists(&conn, "products");
}

#[test]
fn opening_same_store_twice_is_idempotent_and_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shops.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO shops (name) VALUES ('Acme');", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(stored_schema_version(&conn_second).unwrap(), LATEST_SCHEMA_VERSION);
    let shops: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM shops;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(shops, 1);
}

#[test]
fn store_created_without_version_tracking_is_upgraded_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE shops (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            UNIQUE(name)
        );
        CREATE TABLE products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            shop_id INTEGER,
            product TEXT,
            price INTEGER,
            FOREIGN KEY (shop_id) REFERENCES shops (id)
        );
        INSERT INTO shops (name) VALUES ('Legacy');
        INSERT INTO products (shop_id, product, price) VALUES (1, 'Old', 3);",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(stored_schema_version(&conn).unwrap(), LATEST_SCHEMA_VERSION);
    let products: i64 = conn
        .query_row("SELECT COUNT(*) FROM products;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(products, 1);
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, LATEST_SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_store_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("shops.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
