//! CLI `init` command — open the database and seed baseline data.

use anyhow::Result;

use crate::config::AidexConfig;
use crate::db::seed::{seed_database, SeedMode};

/// Initialize the database and seed default categories/tags. With
/// `with_samples` (or `storage.seed_samples` in the config), also insert the
/// bundled sample websites.
pub fn init(config: &AidexConfig, with_samples: bool) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let mode = if with_samples || config.storage.seed_samples {
        SeedMode::Development
    } else {
        SeedMode::Standard
    };
    seed_database(&conn, mode)?;

    let categories: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    let tags: i64 = conn.query_row("SELECT COUNT(*) FROM tags", [], |r| r.get(0))?;
    let websites: i64 = conn.query_row("SELECT COUNT(*) FROM websites", [], |r| r.get(0))?;

    println!("Database ready at {}", db_path.display());
    println!("  {categories} categories, {tags} tags, {websites} websites");
    Ok(())
}
