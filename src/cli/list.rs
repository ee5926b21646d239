//! CLI `list` command — filtered website listing.

use anyhow::Result;
use std::collections::HashMap;

use crate::catalog::categories::CategoryRepo;
use crate::catalog::filter::FilterState;
use crate::catalog::tags::TagRepo;
use crate::catalog::websites::WebsiteRepo;
use crate::config::AidexConfig;

/// List websites matching the given category/tag/search selections.
pub fn list(
    config: &AidexConfig,
    category: Option<i64>,
    tags: &[i64],
    search: Option<&str>,
) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let mut filter = FilterState::new();
    filter.set_category(category);
    filter.set_tags(tags.to_vec());
    if let Some(query) = search {
        filter.set_search(query);
    }

    let mut categories = CategoryRepo::new();
    let mut tag_repo = TagRepo::new();
    let category_names: HashMap<i64, String> = categories
        .load(&conn)
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();
    let tag_names: HashMap<i64, String> = tag_repo
        .load(&conn)
        .iter()
        .map(|t| (t.id, t.name.clone()))
        .collect();

    let mut websites = WebsiteRepo::new();
    let visible = filter.apply(websites.load(&conn));

    if visible.is_empty() {
        println!("No matching websites.");
        return Ok(());
    }

    println!("Found {} website(s)\n", visible.len());
    for site in &visible {
        let cats: Vec<&str> = site
            .category_ids
            .iter()
            .filter_map(|id| category_names.get(id).map(String::as_str))
            .collect();
        let tag_list: Vec<&str> = site
            .tag_ids
            .iter()
            .filter_map(|id| tag_names.get(id).map(String::as_str))
            .collect();

        println!("  {}. {} — {}", site.id, site.name, site.url);
        if !site.description.is_empty() {
            println!("     {}", site.description);
        }
        println!(
            "     categories: {}  tags: {}",
            if cats.is_empty() { "-".to_string() } else { cats.join(", ") },
            if tag_list.is_empty() { "-".to_string() } else { tag_list.join(", ") },
        );
        println!();
    }

    Ok(())
}
