//! CLI `category` subcommands.

use anyhow::Result;

use crate::catalog::categories::CategoryRepo;
use crate::catalog::types::{CategoryPatch, NewCategory};
use crate::config::AidexConfig;

/// List all categories.
pub fn list(config: &AidexConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = CategoryRepo::new();

    let categories = repo.load(&conn);
    if categories.is_empty() {
        println!("No categories. Run `aidex init` to seed the defaults.");
        return Ok(());
    }

    for category in categories {
        println!("  {:>3}  {:<12} ({})", category.id, category.name, category.icon_name);
    }
    Ok(())
}

/// Add a category.
pub fn add(config: &AidexConfig, name: &str, icon_name: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = CategoryRepo::new();

    let id = repo.add(
        &conn,
        NewCategory {
            name: name.to_string(),
            icon_name: icon_name.to_string(),
        },
    )?;
    println!("Added category {id}: {name}");
    Ok(())
}

/// Rename a category.
pub fn rename(config: &AidexConfig, id: i64, name: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = CategoryRepo::new();

    repo.update(
        &conn,
        id,
        &CategoryPatch {
            name: Some(name.to_string()),
            ..CategoryPatch::default()
        },
    )?;
    println!("Renamed category {id} to {name}");
    Ok(())
}

/// Remove a category. Websites that reference it keep the stale id.
pub fn remove(config: &AidexConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = CategoryRepo::new();

    repo.delete(&conn, id)?;
    println!("Removed category {id} (websites keep their existing references)");
    Ok(())
}
