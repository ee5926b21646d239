//! Category repository with a load-once cache.
//!
//! `load` fetches from storage only until the first success; after that it
//! hands back the cache. Mutations bypass the guard and refresh
//! unconditionally, so the cache tracks the store across CRUD calls.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::catalog::types::{Category, CategoryPatch, NewCategory};
use crate::catalog::LoadState;
use crate::error::Result;

pub struct CategoryRepo {
    cache: Vec<Category>,
    state: LoadState,
}

impl CategoryRepo {
    pub fn new() -> Self {
        Self {
            cache: Vec::new(),
            state: LoadState::Uninitialized,
        }
    }

    /// Load-once: returns the cache without touching storage once Ready.
    pub fn load(&mut self, conn: &Connection) -> &[Category] {
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
    pub fn cached(&self) -> &[Category] {
        &self.cache
    }

    /// Unconditional reload. On failure the prior cache and state survive, so
    /// a later `load` retries.
    fn refresh(&mut self, conn: &Connection) {
        let prior = self.state;
        self.state = LoadState::Loading;
        match fetch_all(conn) {
            Ok(categories) => {
                self.cache = categories;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load categories");
                self.state = prior;
            }
        }
    }

    /// Insert a category as given. Returns the assigned id.
    pub fn add(&mut self, conn: &Connection, category: NewCategory) -> Result<i64> {
        let result = conn.execute(
            "INSERT INTO categories (name, icon_name) VALUES (?1, ?2)",
            params![category.name, category.icon_name],
        );
        match result {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                self.refresh(conn);
                Ok(id)
            }
            Err(e) => {
                tracing::error!(error = %e, name = %category.name, "failed to add category");
                Err(e.into())
            }
        }
    }

    /// Partial-field merge update. Missing records are a no-op.
    pub fn update(&mut self, conn: &Connection, id: i64, patch: &CategoryPatch) -> Result<()> {
        match apply_patch(conn, id, patch) {
            Ok(()) => {
                self.refresh(conn);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, category_id = id, "failed to update category");
                Err(e)
            }
        }
    }

    /// Delete by id. Websites referencing this category keep their stale
    /// reference — there is no cascade.
    pub fn delete(&mut self, conn: &Connection, id: i64) -> Result<()> {
        match conn.execute("DELETE FROM categories WHERE id = ?1", params![id]) {
            Ok(_) => {
                self.refresh(conn);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, category_id = id, "failed to delete category");
                Err(e.into())
            }
        }
    }

    /// Fetch a single category by id.
    pub fn get(&self, conn: &Connection, id: i64) -> Result<Option<Category>> {
        let category = conn
            .query_row(
                "SELECT id, name, icon_name FROM categories WHERE id = ?1",
                params![id],
                category_from_row,
            )
            .optional()?;
        Ok(category)
    }
}

impl Default for CategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        icon_name: row.get(2)?,
    })
}

fn fetch_all(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, icon_name FROM categories ORDER BY id")?;
    let categories = stmt
        .query_map([], category_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(categories)
}

fn apply_patch(conn: &Connection, id: i64, patch: &CategoryPatch) -> Result<()> {
    let existing = conn
        .query_row(
            "SELECT id, name, icon_name FROM categories WHERE id = ?1",
            params![id],
            category_from_row,
        )
        .optional()?;

    let mut category = match existing {
        Some(c) => c,
        None => return Ok(()),
    };

    if let Some(name) = &patch.name {
        category.name = name.clone();
    }
    if let Some(icon_name) = &patch.icon_name {
        category.icon_name = icon_name.clone();
    }

    conn.execute(
        "UPDATE categories SET name = ?1, icon_name = ?2 WHERE id = ?3",
        params![category.name, category.icon_name, id],
    )?;
    Ok(())
}
