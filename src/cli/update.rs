//! CLI `update` command — partial update of a website.

use anyhow::{bail, Result};
use std::path::Path;

use crate::catalog::apikey::{validate_api_key, validate_url};
use crate::catalog::tags::TagRepo;
use crate::catalog::types::WebsitePatch;
use crate::catalog::websites::WebsiteRepo;
use crate::config::AidexConfig;

/// Update any subset of a website's fields. When the tag list changes, newly
/// attached tags get their counts incremented and detached ones decremented.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    config: &AidexConfig,
    id: i64,
    name: Option<String>,
    url: Option<String>,
    description: Option<String>,
    categories: Option<Vec<i64>>,
    tags: Option<Vec<i64>>,
    icon: Option<&Path>,
    api_keys: Option<Vec<String>>,
) -> Result<()> {
    if let Some(url) = &url {
        validate_url(url)?;
    }
    if let Some(keys) = &api_keys {
        for key in keys {
            validate_api_key(key)?;
        }
    }

    let icon_data = match icon {
        Some(path) => Some(crate::image::read_image(path).await?),
        None => None,
    };

    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut websites = WebsiteRepo::new();

    let before = match websites.get(&conn, id)? {
        Some(s) => s,
        None => bail!("website {id} not found"),
    };

    let patch = WebsitePatch {
        name,
        url,
        description,
        api_keys,
        category_ids: categories,
        tag_ids: tags.clone(),
        icon: icon_data.as_ref().map(|d| d.buffer.clone()),
        icon_mime_type: icon_data.map(|d| d.mime_type),
    };
    websites.update(&conn, id, &patch)?;

    if let Some(after_tags) = &tags {
        let tag_repo = TagRepo::new();
        for tag_id in after_tags {
            if !before.tag_ids.contains(tag_id) {
                tag_repo.increment_count(&conn, *tag_id);
            }
        }
        for tag_id in &before.tag_ids {
            if !after_tags.contains(tag_id) {
                tag_repo.decrement_count(&conn, *tag_id);
            }
        }
    }

    println!("Updated website {id}");
    Ok(())
}
