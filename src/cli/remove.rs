//! CLI `remove` command — delete a website.

use anyhow::{bail, Result};

use crate::catalog::tags::TagRepo;
use crate::catalog::websites::WebsiteRepo;
use crate::config::AidexConfig;

/// Remove a website by id and decrement the usage counts of its tags.
pub fn remove(config: &AidexConfig, id: i64) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut websites = WebsiteRepo::new();

    let site = match websites.get(&conn, id)? {
        Some(s) => s,
        None => bail!("website {id} not found"),
    };

    websites.delete(&conn, id)?;

    let tag_repo = TagRepo::new();
    for tag_id in &site.tag_ids {
        tag_repo.decrement_count(&conn, *tag_id);
    }

    println!("Removed website {id}: {}", site.name);
    Ok(())
}
