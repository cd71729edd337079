//! # Wishlist Repository
//!
//! Same snapshot model as the cart: whole-list replace, position-ordered load.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use aurum_core::WishlistItem;

/// Repository for wishlist snapshots.
#[derive(Debug, Clone)]
pub struct WishlistRepository {
    pool: SqlitePool,
}

impl WishlistRepository {
    /// Creates a new WishlistRepository.
    pub fn new(pool: SqlitePool) -> Self {
        WishlistRepository { pool }
    }

    /// Loads the saved entries for `session_id` in display order.
    pub async fn load(&self, session_id: &str) -> DbResult<Vec<WishlistItem>> {
        let items = sqlx::query_as::<_, WishlistItem>(
            r#"
            SELECT id, product_id, name, price, image, added_at
            FROM wishlist_items
            WHERE session_id = ?1
            ORDER BY position
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(session_id = %session_id, count = items.len(), "Loaded wishlist snapshot");
        Ok(items)
    }

    /// Replaces the saved entries for `session_id` in one transaction.
    pub async fn replace(&self, session_id: &str, items: &[WishlistItem]) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        sqlx::query("DELETE FROM wishlist_items WHERE session_id = ?1")
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO wishlist_items (
                    session_id, position, id, product_id, name,
                    price, image, added_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
            )
            .bind(session_id)
            .bind(position as i64)
            .bind(&item.id)
            .bind(&item.product_id)
            .bind(&item.name)
            .bind(item.price)
            .bind(&item.image)
            .bind(&item.added_at)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(session_id = %session_id, count = items.len(), "Saved wishlist snapshot");
        Ok(())
    }

    /// Deletes the saved entries for `session_id`. Returns rows removed.
    pub async fn clear(&self, session_id: &str) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE session_id = ?1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Number of saved entries for `session_id`.
    pub async fn count(&self, session_id: &str) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM wishlist_items WHERE session_id = ?1")
                .bind(session_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
