//! CLI `show` command — full details for one website.

use anyhow::{bail, Result};

use crate::catalog::apikey::mask_api_key;
use crate::catalog::websites::WebsiteRepo;
use crate::config::AidexConfig;
use crate::image::IconStore;

/// Show one website. With `icon`, the stored icon blob is materialized as a
/// scratch file under the configured icon directory; the file stays behind
/// for the viewer, unreleased.
pub fn show(config: &AidexConfig, id: i64, icon: bool) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let repo = WebsiteRepo::new();

    let site = match repo.get(&conn, id)? {
        Some(s) => s,
        None => bail!("website {id} not found"),
    };

    println!("{} — {}", site.name, site.url);
    if !site.description.is_empty() {
        println!("  {}", site.description);
    }
    println!("  categories: {:?}", site.category_ids);
    println!("  tags:       {:?}", site.tag_ids);
    if site.api_keys.is_empty() {
        println!("  api keys:   none");
    } else {
        for (i, key) in site.api_keys.iter().enumerate() {
            println!("  api key {i}:  {}", mask_api_key(key));
        }
    }
    println!("  created:    {}", site.created_at);
    println!("  updated:    {}", site.updated_at);

    if icon {
        if site.icon.is_empty() {
            println!("  icon:       none");
        } else {
            let mut icons = IconStore::new(config.resolved_icon_dir());
            let handle = icons.create(&site.icon, &site.icon_mime_type)?;
            println!(
                "  icon:       {} bytes, written to {}",
                site.icon.len(),
                handle.path().display()
            );
        }
    }

    Ok(())
}
