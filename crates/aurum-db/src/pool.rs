//! # Database Handle
//!
//! Opens the SQLite file holding every session's cart and wishlist, applies
//! the embedded migrations and hands out repositories.
//!
//! ```text
//! DbConfig::new(path) ──► Database::new ──► WAL + NORMAL sync
//!                                         ──► SqlitePool (max_connections)
//!                                         ──► migrations
//!                              │
//!                              ├── carts()     → CartRepository
//!                              └── wishlists() → WishlistRepository
//! ```
//!
//! WAL lets a hydrating reader run while a snapshot write commits.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::cart::CartRepository;
use crate::repository::wishlist::WishlistRepository;

/// Where the database lives and how many connections it may use.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_path: PathBuf,
    /// Default: 5
    pub max_connections: u32,
}

impl DbConfig {
    /// Configuration for the file at `path` (created if missing).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// An isolated in-memory database (tests).
    ///
    /// One connection only: every connection to `:memory:` would otherwise
    /// see its own empty database.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
        }
    }
}

/// Shared handle to the storefront database. Clones share one pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and brings the schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening database");

        let options = SqliteConnectOptions::from_str(&format!(
            "sqlite://{}?mode=rwc",
            config.database_path.display()
        ))
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
        debug!(max_connections = config.max_connections, "Pool ready");

        migrations::run_migrations(&pool).await?;

        Ok(Database { pool })
    }

    pub fn carts(&self) -> CartRepository {
        CartRepository::new(self.pool.clone())
    }

    pub fn wishlists(&self) -> WishlistRepository {
        WishlistRepository::new(self.pool.clone())
    }

    /// `(known, applied)` migration counts.
    pub async fn migration_status(&self) -> DbResult<(usize, usize)> {
        migrations::migration_status(&self.pool).await
    }

    /// Closes the pool. Repository calls fail afterwards.
    pub async fn close(&self) {
        info!("Closing database");
        self.pool.close().await;
    }
}
