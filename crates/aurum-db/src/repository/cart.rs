//! # Cart Repository
//!
//! Saves and restores the cart slice's item list, one session at a time.
//!
//! `position` is the line's index in the store. Loading orders by it, so a
//! restored cart displays exactly as it was saved, duplicates included.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use aurum_core::CartItem;

/// Repository for cart snapshots.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CartRepository::new(pool);
///
/// repo.replace("default", state.cart().items()).await?;
/// let items = repo.load("default").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartRepository { pool }
    }

    /// Loads the saved lines for `session_id` in display order.
    ///
    /// An unknown session is an empty cart, not an error.
    pub async fn load(&self, session_id: &str) -> DbResult<Vec<CartItem>> {
        let items = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT id, product_id, name, price, quantity, image, variant
            FROM cart_items
            WHERE session_id = ?1
            ORDER BY position
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(session_id = %session_id, count = items.len(), "Loaded cart snapshot");
        Ok(items)
    }

    /// Replaces the saved lines for `session_id` with `items`.
    ///
    /// Delete and inserts share one transaction; a failure leaves the
    /// previous snapshot intact.
    pub async fn replace(&self, session_id: &str, items: &[CartItem]) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        sqlx::query("DELETE FROM cart_items WHERE session_id = ?1")
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO cart_items (
                    session_id, position, id, product_id, name,
                    price, quantity, image, variant, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
            )
            .bind(session_id)
            .bind(position as i64)
            .bind(&item.id)
            .bind(&item.product_id)
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .bind(&item.image)
            .bind(&item.variant)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(session_id = %session_id, count = items.len(), "Saved cart snapshot");
        Ok(())
    }

    /// Deletes the saved lines for `session_id`. Returns rows removed.
    pub async fn clear(&self, session_id: &str) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM cart_items WHERE session_id = ?1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        debug!(session_id = %session_id, removed = result.rows_affected(), "Cleared cart snapshot");
        Ok(result.rows_affected())
    }

    /// Number of saved lines for `session_id`.
    pub async fn count(&self, session_id: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_items WHERE session_id = ?1")
            .bind(session_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
