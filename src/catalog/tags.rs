//! Tag repository with a load-once cache and usage-count bookkeeping.
//!
//! `increment_count`/`decrement_count` are read-modify-write with no
//! atomicity guarantee; two concurrent bumps of the same tag can lose one of
//! the writes. The count is informational only and is never recomputed from
//! actual website references.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::catalog::types::{NewTag, Tag, TagPatch};
use crate::catalog::LoadState;
use crate::error::Result;

pub struct TagRepo {
    cache: Vec<Tag>,
    state: LoadState,
}

impl TagRepo {
    pub fn new() -> Self {
        Self {
            cache: Vec::new(),
            state: LoadState::Uninitialized,
        }
    }

    /// Load-once: returns the cache without touching storage once Ready.
    pub fn load(&mut self, conn: &Connection) -> &[Tag] {
        if self.state != LoadState::Ready {
            self.refresh(conn);
        }
        &self.cache
    }

    /// Current cache readiness.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The cache as of the last successful load.
    pub fn cached(&self) -> &[Tag] {
        &self.cache
    }

    fn refresh(&mut self, conn: &Connection) {
        let prior = self.state;
        self.state = LoadState::Loading;
        match fetch_all(conn) {
            Ok(tags) => {
                self.cache = tags;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load tags");
                self.state = prior;
            }
        }
    }

    /// Insert a tag as given, count included. Returns the assigned id.
    pub fn add(&mut self, conn: &Connection, tag: NewTag) -> Result<i64> {
        let result = conn.execute(
            "INSERT INTO tags (name, count) VALUES (?1, ?2)",
            params![tag.name, tag.count],
        );
        match result {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                self.refresh(conn);
                Ok(id)
            }
            Err(e) => {
                tracing::error!(error = %e, name = %tag.name, "failed to add tag");
                Err(e.into())
            }
        }
    }

    /// Partial-field merge update. Missing records are a no-op.
    pub fn update(&mut self, conn: &Connection, id: i64, patch: &TagPatch) -> Result<()> {
        match apply_patch(conn, id, patch) {
            Ok(()) => {
                self.refresh(conn);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, tag_id = id, "failed to update tag");
                Err(e)
            }
        }
    }

    /// Delete by id. Websites referencing this tag keep their stale
    /// reference — there is no cascade, and no count is adjusted anywhere.
    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<()> {
        match conn.execute("DELETE FROM tags WHERE id = ?1", params![id]) {
            Ok(_) => {
                self.refresh(conn);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, tag_id = id, "failed to delete tag");
                Err(e.into())
            }
        }
    }

    /// Fetch a single tag by id.
    pub fn get(&self, conn: &Connection, id: i64) -> Result<Option<Tag>> {
        let tag = conn
            .query_row(
                "SELECT id, name, count FROM tags WHERE id = ?1",
                params![id],
                tag_from_row,
            )
            .optional()?;
        Ok(tag)
    }

    /// Bump a tag's usage count by one. Unknown ids are ignored; storage
    /// errors are logged and swallowed.
    pub fn increment_count(&self, conn: &Connection, id: i64) {
        if let Err(e) = increment(conn, id) {
            tracing::error!(error = %e, tag_id = id, "failed to increment tag count");
        }
    }

    /// Drop a tag's usage count by one, never below zero. A zero count stays
    /// zero without a write. Storage errors are logged and swallowed.
    pub fn decrement_count(&self, conn: &Connection, id: i64) {
        if let Err(e) = decrement(conn, id) {
            tracing::error!(error = %e, tag_id = id, "failed to decrement tag count");
        }
    }
}

impl Default for TagRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn tag_from_row(row: &Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        count: row.get(2)?,
    })
}

fn fetch_all(conn: &Connection) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare("SELECT id, name, count FROM tags ORDER BY id")?;
    let tags = stmt
        .query_map([], tag_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(tags)
}

fn apply_patch(conn: &Connection, id: i64, patch: &TagPatch) -> Result<()> {
    let existing = conn
        .query_row(
            "SELECT id, name, count FROM tags WHERE id = ?1",
            params![id],
            tag_from_row,
        )
        .optional()?;

    let mut tag = match existing {
        Some(t) => t,
        None => return Ok(()),
    };

    if let Some(name) = &patch.name {
        tag.name = name.clone();
    }
    if let Some(count) = patch.count {
        tag.count = count;
    }

    conn.execute(
        "UPDATE tags SET name = ?1, count = ?2 WHERE id = ?3",
        params![tag.name, tag.count, id],
    )?;
    Ok(())
}

fn increment(conn: &Connection, id: i64) -> Result<()> {
    let tag = conn
        .query_row(
            "SELECT id, name, count FROM tags WHERE id = ?1",
            params![id],
            tag_from_row,
        )
        .optional()?;
    if let Some(tag) = tag {
        conn.execute(
            "UPDATE tags SET count = ?1 WHERE id = ?2",
            params![tag.count + 1, id],
        )?;
    }
    Ok(())
}

fn decrement(conn: &Connection, id: i64) -> Result<()> {
    let tag = conn
        .query_row(
            "SELECT id, name, count FROM tags WHERE id = ?1",
            params![id],
            tag_from_row,
        )
        .optional()?;
    if let Some(tag) = tag {
        if tag.count > 0 {
            conn.execute(
                "UPDATE tags SET count = ?1 WHERE id = ?2",
                params![tag.count - 1, id],
            )?;
        }
    }
    Ok(())
}
