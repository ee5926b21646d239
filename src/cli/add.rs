//! CLI `add` command — insert a website into the catalog.

use anyhow::Result;
use std::path::Path;

use crate::catalog::apikey::{validate_api_key, validate_url};
use crate::catalog::tags::TagRepo;
use crate::catalog::types::NewWebsite;
use crate::catalog::websites::WebsiteRepo;
use crate::config::AidexConfig;

/// Add a website. The URL and any API keys are validated up front; the icon
/// file (if given) is read into the record. Attached tags get their usage
/// counts bumped.
#[allow(clippy::too_many_arguments)]
pub async fn add(
    config: &AidexConfig,
    name: &str,
    url: &str,
    description: &str,
    categories: &[i64],
    tags: &[i64],
    icon: Option<&Path>,
    api_keys: &[String],
) -> Result<()> {
    validate_url(url)?;
    for key in api_keys {
        validate_api_key(key)?;
    }

    let icon_data = match icon {
        Some(path) => Some(crate::image::read_image(path).await?),
        None => None,
    };
    let (icon_buffer, icon_mime_type) = icon_data
        .map(|d| (d.buffer, d.mime_type))
        .unwrap_or_default();

    let conn = crate::db::open_database(config.resolved_db_path())?;
    let mut websites = WebsiteRepo::new();

    let id = websites.add(
        &conn,
        NewWebsite {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon_buffer,
            icon_mime_type,
            description: description.to_string(),
            api_keys: api_keys.to_vec(),
            category_ids: categories.to_vec(),
            tag_ids: tags.to_vec(),
        },
    )?;

    let tag_repo = TagRepo::new();
    for &tag_id in tags {
        tag_repo.increment_count(&conn, tag_id);
    }

    println!("Added website {id}: {name}");
    Ok(())
}
