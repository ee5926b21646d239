//! Per-entity repositories, filter state, and validation helpers.
//!
//! Each repository is an explicit object constructed by the caller — there is
//! no module-global state. Repositories own an in-memory cache of their
//! collection; mutations write through to storage and refresh the cache.

pub mod apikey;
pub mod categories;
pub mod filter;
pub mod tags;
pub mod types;
pub mod websites;

/// Cache readiness for the load-once repositories (categories and tags).
///
/// `load` transitions Uninitialized → Loading → Ready; a failed load falls
/// back to the prior state so a later call retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}
