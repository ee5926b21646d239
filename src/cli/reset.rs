//! CLI `reset` command — delete all catalog data after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::AidexConfig;

/// Delete all websites, categories, and tags after confirmation.
pub fn reset(config: &AidexConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL websites, categories, and tags.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let conn = crate::db::open_database(&db_path)?;

    // Also reset the id counters so a later `init` reseeds with ids 1..N
    conn.execute_batch(
        "DELETE FROM websites;
         DELETE FROM categories;
         DELETE FROM tags;
         DELETE FROM sqlite_sequence WHERE name IN ('websites','categories','tags');",
    )?;

    println!("All catalog data deleted. Run `aidex init` to reseed the defaults.");
    Ok(())
}
