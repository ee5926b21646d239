//! Website repository — CRUD over the `websites` collection.
//!
//! Unlike the category/tag repositories, the website cache has no load-once
//! guard: `load` always refreshes from storage. Updates follow a
//! read-merge-write sequence with last-write-wins semantics; there is no
//! isolation between two concurrent updaters of the same record.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::catalog::types::{NewWebsite, Website, WebsitePatch};
use crate::error::Result;

const COLUMNS: &str = "id, name, url, icon, icon_mime_type, description, \
                       api_keys, category_ids, tag_ids, created_at, updated_at";

pub struct WebsiteRepo {
    cache: Vec<Website>,
}

impl WebsiteRepo {
    pub fn new() -> Self {
        Self { cache: Vec::new() }
    }

    /// Refresh the cache from storage and return it. Always hits the
    /// database; on failure the prior cache stays visible.
    pub fn load(&mut self, conn: &Connection) -> &[Website] {
        match fetch_all(conn) {
            Ok(websites) => self.cache = websites,
            Err(e) => tracing::error!(error = %e, "failed to load websites"),
        }
        &self.cache
    }

    /// The cache as of the last successful load.
    pub fn cached(&self) -> &[Website] {
        &self.cache
    }

    /// Insert a website, stamping creation/update timestamps. Returns the
    /// assigned id and refreshes the cache.
    pub fn add(&mut self, conn: &Connection, website: NewWebsite) -> Result<i64> {
        match insert_website(conn, &website) {
            Ok(id) => {
                self.load(conn);
                Ok(id)
            }
            Err(e) => {
                tracing::error!(error = %e, name = %website.name, "failed to add website");
                Err(e)
            }
        }
    }

    /// Partial-field merge update. Missing records are a no-op. Re-stamps
    /// `updated_at`; list-valued patch fields are cloned into the stored
    /// record so later mutation of the caller's vectors cannot leak through.
    pub fn update(&mut self, conn: &Connection, id: i64, patch: &WebsitePatch) -> Result<()> {
        match apply_patch(conn, id, patch) {
            Ok(()) => {
                self.load(conn);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, website_id = id, "failed to update website");
                Err(e)
            }
        }
    }

    /// Delete by id and refresh the cache. Deleting a missing id is a no-op.
    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<()> {
        match conn.execute("DELETE FROM websites WHERE id = ?1", params![id]) {
            Ok(_) => {
                self.load(conn);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, website_id = id, "failed to delete website");
                Err(e.into())
            }
        }
    }

    /// Fetch a single website by id.
    pub fn get(&self, conn: &Connection, id: i64) -> Result<Option<Website>> {
        let website = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM websites WHERE id = ?1"),
                params![id],
                website_from_row,
            )
            .optional()?;
        Ok(website)
    }
}

impl Default for WebsiteRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_all(conn: &Connection) -> Result<Vec<Website>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM websites ORDER BY id"))?;
    let websites = stmt
        .query_map([], website_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(websites)
}

fn website_from_row(row: &Row<'_>) -> rusqlite::Result<Website> {
    let api_keys: String = row.get(6)?;
    let category_ids: String = row.get(7)?;
    let tag_ids: String = row.get(8)?;
    Ok(Website {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        icon: row.get(3)?,
        icon_mime_type: row.get(4)?,
        description: row.get(5)?,
        api_keys: decode_list(&api_keys)?,
        category_ids: decode_list(&category_ids)?,
        tag_ids: decode_list(&tag_ids)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn decode_list<T: serde::de::DeserializeOwned>(raw: &str) -> rusqlite::Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|_| rusqlite::Error::InvalidQuery)
}

fn insert_website(conn: &Connection, website: &NewWebsite) -> Result<i64> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO websites \
         (name, url, icon, icon_mime_type, description, api_keys, category_ids, tag_ids, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
        params![
            website.name,
            website.url,
            website.icon,
            website.icon_mime_type,
            website.description,
            serde_json::to_string(&website.api_keys)?,
            serde_json::to_string(&website.category_ids)?,
            serde_json::to_string(&website.tag_ids)?,
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn apply_patch(conn: &Connection, id: i64, patch: &WebsitePatch) -> Result<()> {
    let existing = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM websites WHERE id = ?1"),
            params![id],
            website_from_row,
        )
        .optional()?;

    let mut website = match existing {
        Some(w) => w,
        None => return Ok(()),
    };

    if let Some(name) = &patch.name {
        website.name = name.clone();
    }
    if let Some(url) = &patch.url {
        website.url = url.clone();
    }
    if let Some(icon) = &patch.icon {
        website.icon = icon.clone();
    }
    if let Some(mime) = &patch.icon_mime_type {
        website.icon_mime_type = mime.clone();
    }
    if let Some(description) = &patch.description {
        website.description = description.clone();
    }
    if let Some(api_keys) = &patch.api_keys {
        website.api_keys = api_keys.clone();
    }
    if let Some(category_ids) = &patch.category_ids {
        website.category_ids = category_ids.clone();
    }
    if let Some(tag_ids) = &patch.tag_ids {
        website.tag_ids = tag_ids.clone();
    }
    website.updated_at = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "UPDATE websites SET name = ?1, url = ?2, icon = ?3, icon_mime_type = ?4, \
         description = ?5, api_keys = ?6, category_ids = ?7, tag_ids = ?8, updated_at = ?9 \
         WHERE id = ?10",
        params![
            website.name,
            website.url,
            website.icon,
            website.icon_mime_type,
            website.description,
            serde_json::to_string(&website.api_keys)?,
            serde_json::to_string(&website.category_ids)?,
            serde_json::to_string(&website.tag_ids)?,
            website.updated_at,
            id,
        ],
    )?;
    Ok(())
}
