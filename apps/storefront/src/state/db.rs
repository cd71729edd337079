//! # Database State
//!
//! The persistence collaborator for one session: the `Database` handle plus
//! the session id every snapshot is filed under.
//!
//! `Database` wraps a `SqlitePool`, which is thread-safe. Snapshot writes
//! for the session still go through `write_lock` one at a time: a writer
//! reads the store and commits while holding it, so an older snapshot can
//! never land after a newer one.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use aurum_db::Database;

/// Database handle bound to a session. Clones share the write lock.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
    session_id: String,
    write_lock: Arc<Mutex<()>>,
}

impl DbState {
    /// Creates a new DbState for `session_id`.
    pub fn new(db: Database, session_id: impl Into<String>) -> Self {
        DbState {
            db,
            session_id: session_id.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a reference to the inner Database.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let items = db_state.inner().carts().load(db_state.session_id()).await?;
    /// ```
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Key the cart and wishlist are persisted under.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Waits for exclusive write access to this session's snapshot.
    ///
    /// Read the store only after this returns, and keep the guard until the
    /// write has committed.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
