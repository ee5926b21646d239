//! Record types for the three catalog collections.
//!
//! Defines [`Website`], [`Category`], and [`Tag`] (full records as stored),
//! plus the `New*` insert payloads and `*Patch` partial-update payloads used
//! by the repositories. Category/tag id lists on a website are advisory
//! references — deleting a category or tag does not touch the websites that
//! reference it.

use serde::{Deserialize, Serialize};

/// A website record, matching the `websites` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Website {
    /// Storage-assigned primary key.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Site URL (http or https by convention, not enforced here).
    pub url: String,
    /// Raw icon bytes; empty when no icon was uploaded.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub icon: Vec<u8>,
    /// MIME type of `icon`, e.g. `"image/png"`.
    pub icon_mime_type: String,
    pub description: String,
    /// API keys for this service, in user-entered order.
    pub api_keys: Vec<String>,
    /// Referenced category ids.
    pub category_ids: Vec<i64>,
    /// Referenced tag ids.
    pub tag_ids: Vec<i64>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-modification timestamp.
    pub updated_at: String,
}

/// Payload for inserting a website. Timestamps are assigned by the repository.
#[derive(Debug, Clone, Default)]
pub struct NewWebsite {
    pub name: String,
    pub url: String,
    pub icon: Vec<u8>,
    pub icon_mime_type: String,
    pub description: String,
    pub api_keys: Vec<String>,
    pub category_ids: Vec<i64>,
    pub tag_ids: Vec<i64>,
}

/// Partial update for a website. `None` fields are left untouched; list
/// fields are cloned into the stored record so the caller's vectors are never
/// aliased.
#[derive(Debug, Clone, Default)]
pub struct WebsitePatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<Vec<u8>>,
    pub icon_mime_type: Option<String>,
    pub description: Option<String>,
    pub api_keys: Option<Vec<String>>,
    pub category_ids: Option<Vec<i64>>,
    pub tag_ids: Option<Vec<i64>>,
}

/// A category record. Name unique by convention only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Name of the display icon (e.g. `"robot"`).
    pub icon_name: String,
}

/// Payload for inserting a category.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub icon_name: String,
}

/// Partial update for a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon_name: Option<String>,
}

/// A tag record with its informational usage count.
///
/// The count tracks how many websites a tag was attached to by the call sites
/// that bother to bump it; nothing recomputes it from actual references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub count: u32,
}

/// Payload for inserting a tag. Inserted as given, count included.
#[derive(Debug, Clone, Default)]
pub struct NewTag {
    pub name: String,
    pub count: u32,
}

/// Partial update for a tag.
#[derive(Debug, Clone, Default)]
pub struct TagPatch {
    pub name: Option<String>,
    pub count: Option<u32>,
}
