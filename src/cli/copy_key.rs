//! CLI `copy-key` command — copy an API key to the system clipboard.

use anyhow::{bail, Result};

use crate::catalog::apikey::mask_api_key;
use crate::catalog::websites::WebsiteRepo;
use crate::config::AidexConfig;

/// Copy one of a website's API keys (by position) to the clipboard. The key
/// is never printed in full — only its masked form.
pub fn copy_key(config: &AidexConfig, id: i64, index: usize) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let repo = WebsiteRepo::new();

    let site = match repo.get(&conn, id)? {
        Some(s) => s,
        None => bail!("website {id} not found"),
    };

    let key = match site.api_keys.get(index) {
        Some(k) => k,
        None => bail!(
            "website {id} has {} API key(s), no index {index}",
            site.api_keys.len()
        ),
    };

    crate::clipboard::copy_text(key);
    println!("Copied API key {} for {}", mask_api_key(key), site.name);
    Ok(())
}
