//! CLI `tag` subcommands.

use anyhow::Result;

use crate::catalog::tags::TagRepo;
use crate::catalog::types::{NewTag, TagPatch};
use crate::config::AidexConfig;

/// List all tags with their usage counts.
pub fn list(config: &AidexConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = TagRepo::new();

    let tags = repo.load(&conn);
    if tags.is_empty() {
        println!("No tags. Run `aidex init` to seed the defaults.");
        return Ok(());
    }

    for tag in tags {
        println!("  {:>3}  {:<12} used {} time(s)", tag.id, tag.name, tag.count);
    }
    Ok(())
}

/// Add a tag with a zero usage count.
pub fn add(config: &AidexConfig, name: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = TagRepo::new();

    let id = repo.add(
        &conn,
        NewTag {
            name: name.to_string(),
            count: 0,
        },
    )?;
    println!("Added tag {id}: {name}");
    Ok(())
}

/// Rename a tag.
pub fn rename(config: &AidexConfig, id: i64, name: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = TagRepo::new();

    repo.update(
        &conn,
        id,
        &TagPatch {
            name: Some(name.to_string()),
            ..TagPatch::default()
        },
    )?;
    println!("Renamed tag {id} to {name}");
    Ok(())
}

/// Remove a tag. Websites that reference it keep the stale id and no counts
/// are adjusted.
pub fn remove(config: &AidexConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut repo = TagRepo::new();

    repo.delete(&conn, id)?;
    println!("Removed tag {id} (websites keep their existing references)");
    Ok(())
}
