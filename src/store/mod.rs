//! Application persistence
//!
//! The conversation controller only depends on the [`ApplicationStore`]
//! trait; `SqliteStore` is the production backend.

mod sqlite;
mod types;

pub(crate) use sqlite::SqliteStore;
pub(crate) use types::{Application, StoredApplication};

use crate::error::StoreError;

/// Insert-or-update of completed applications, keyed by username.
pub(crate) trait ApplicationStore: Send + Sync {
    /// Write `application`, replacing every non-key field of an existing row
    /// with the same username. Either all fields change or none do.
    fn upsert(&self, application: &Application) -> Result<(), StoreError>;
}
