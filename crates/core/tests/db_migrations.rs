use rusqlite::Connection;
use wishlist_core::db::migrations::latest_version;
use wishlist_core::db::{open_db, open_db_in_memory, DbError};
use wishlist_core::PLACE_NAME_MAX_CHARS;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "places");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wishlist.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO places (name, visited) VALUES ('Tokyo', 0);", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM places;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
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
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_rejects_blank_names_and_non_boolean_visited() {
    let conn = open_db_in_memory().unwrap();

    assert!(conn
        .execute("INSERT INTO places (name, visited) VALUES ('  ', 0);", [])
        .is_err());
    assert!(conn
        .execute("INSERT INTO places (name, visited) VALUES ('Moab', 2);", [])
        .is_err());
}

#[test]
fn schema_rejects_names_longer_than_the_form_limit() {
    let conn = open_db_in_memory().unwrap();
    let at_limit = "é".repeat(PLACE_NAME_MAX_CHARS);
    let over = "a".repeat(PLACE_NAME_MAX_CHARS + 1);

    conn.execute(
        "INSERT INTO places (name, visited) VALUES (?1, 0);",
        [at_limit.as_str()],
    )
    .unwrap();
    assert!(conn
        .execute(
            "INSERT INTO places (name, visited) VALUES (?1, 0);",
            [over.as_str()],
        )
        .is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
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
