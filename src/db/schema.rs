//! SQL DDL for all aidex tables.
//!
//! Defines the `websites`, `categories`, and `tags` record collections plus
//! the `schema_meta` version table. List-valued website fields (API keys,
//! category ids, tag ids) are stored as JSON arrays in TEXT columns; the icon
//! is a BLOB. All DDL uses `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

/// All schema DDL statements for aidex's tables.
const SCHEMA_SQL: &str = r#"
-- Website catalog entries
CREATE TABLE IF NOT EXISTS websites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    url TEXT NOT NULL,
    icon BLOB NOT NULL DEFAULT x'',
    icon_mime_type TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    api_keys TEXT NOT NULL DEFAULT '[]',
    category_ids TEXT NOT NULL DEFAULT '[]',
    tag_ids TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_websites_name ON websites(name);
CREATE INDEX IF NOT EXISTS idx_websites_created ON websites(created_at);

-- Categories (referenced from websites.category_ids, advisory only)
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    icon_name TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_categories_name ON categories(name);

-- Tags with informational usage counts
CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    count INTEGER NOT NULL DEFAULT 0 CHECK(count >= 0)
);

CREATE INDEX IF NOT EXISTS idx_tags_name ON tags(name);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
