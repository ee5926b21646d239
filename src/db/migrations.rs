//! Forward-only schema migration framework.
//!
//! Tracks the schema version in `schema_meta` and applies the entries of
//! [`MIGRATIONS`] sequentially, each inside its own transaction, to bring the
//! database up to [`CURRENT_SCHEMA_VERSION`]. Each migration is a transform
//! over the stored records; the record-level transforms are pure functions
//! tested independently of the SQL plumbing.

use rusqlite::{params, Connection};

/// The schema version that the current binary expects.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// A single forward migration step.
struct Migration {
    version: u32,
    name: &'static str,
    run: fn(&Connection) -> rusqlite::Result<()>,
}

/// All known migrations, in ascending version order.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 2,
    name: "website-category-list",
    run: migrate_v1_to_v2,
}];

/// Get the current schema version from the database.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| {
            let val: String = row.get(0)?;
            Ok(val.parse::<u32>().unwrap_or(0))
        },
    )
}

/// Run any pending forward-only migrations. Each migration runs in a transaction.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    let mut version = get_schema_version(conn)?;
    tracing::debug!(
        schema_version = version,
        target = CURRENT_SCHEMA_VERSION,
        "checking migrations"
    );

    for migration in MIGRATIONS {
        if migration.version <= version {
            continue;
        }

        tracing::info!(
            from = version,
            to = migration.version,
            name = migration.name,
            "running migration"
        );

        let tx = conn.unchecked_transaction()?;
        (migration.run)(&tx)?;
        tx.execute(
            "UPDATE schema_meta SET value = ?1 WHERE key = 'schema_version'",
            [migration.version.to_string()],
        )?;
        tx.commit()?;

        version = migration.version;
    }

    Ok(())
}

/// Migration v1 → v2: websites move from a singular `category_id` column to a
/// `category_ids` JSON list column.
///
/// Version 1 keyed each website to at most one category. Version 2 stores a
/// list. Every record with a singular id and no list form becomes a
/// single-element list; records that already carry a list are left unchanged.
/// The singular column is dropped at the end, so a second run (or a fresh v2
/// database) is a no-op.
fn migrate_v1_to_v2(conn: &Connection) -> rusqlite::Result<()> {
    if !has_column(conn, "websites", "category_id")? {
        // Fresh database, already in list form.
        return Ok(());
    }

    if !has_column(conn, "websites", "category_ids")? {
        conn.execute(
            "ALTER TABLE websites ADD COLUMN category_ids TEXT NOT NULL DEFAULT '[]'",
            [],
        )?;
    }

    let mut stmt = conn.prepare("SELECT id, category_id, category_ids FROM websites")?;
    let rows: Vec<(i64, Option<i64>, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    drop(stmt);

    for (id, singular, list) in rows {
        let migrated = migrated_category_list(singular, list.as_deref());
        conn.execute(
            "UPDATE websites SET category_ids = ?1 WHERE id = ?2",
            params![migrated, id],
        )?;
    }

    conn.execute("ALTER TABLE websites DROP COLUMN category_id", [])?;
    Ok(())
}

/// Record-level transform for the v1 → v2 migration.
///
/// An absent, empty, or `[]` list means the record has not been migrated yet;
/// in that case the singular id (if any) becomes a singleton list. A
/// populated list is returned unchanged.
pub(crate) fn migrated_category_list(singular: Option<i64>, list: Option<&str>) -> String {
    match list {
        Some(l) if !l.is_empty() && l != "[]" => l.to_string(),
        _ => match singular {
            Some(id) => format!("[{id}]"),
            None => "[]".to_string(),
        },
    }
}

/// True if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.iter().any(|n| n == column))
}
