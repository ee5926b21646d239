#![allow(dead_code)]

use aidex::db;
use aidex::db::seed::{seed_database, SeedMode};
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// Open a fresh in-memory database and seed it.
pub fn seeded_db(mode: SeedMode) -> Connection {
    let conn = test_db();
    seed_database(&conn, mode).unwrap();
    conn
}

/// Row count of a table.
pub fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

/// Build a hand-rolled version-1 database: websites carry a singular
/// `category_id` column and no list form.
pub fn v1_db(conn: &Connection) {
    conn.execute_batch(
        r#"
        CREATE TABLE websites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            icon BLOB NOT NULL DEFAULT x'',
            icon_mime_type TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            api_keys TEXT NOT NULL DEFAULT '[]',
            category_id INTEGER,
            tag_ids TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX idx_websites_name ON websites(name);
        CREATE INDEX idx_websites_created ON websites(created_at);
        CREATE TABLE categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            icon_name TEXT NOT NULL DEFAULT ''
        );
        CREATE TABLE tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            count INTEGER NOT NULL DEFAULT 0 CHECK(count >= 0)
        );
        CREATE TABLE schema_meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        INSERT INTO schema_meta (key, value) VALUES ('schema_version', '1');
        "#,
    )
    .unwrap();
}

/// Insert a website row into a v1 database with the given singular category.
pub fn v1_website(conn: &Connection, name: &str, category_id: Option<i64>) -> i64 {
    conn.execute(
        "INSERT INTO websites (name, url, category_id, created_at, updated_at) \
         VALUES (?1, ?2, ?3, '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00')",
        rusqlite::params![name, format!("https://{name}.example"), category_id],
    )
    .unwrap();
    conn.last_insert_rowid()
}
