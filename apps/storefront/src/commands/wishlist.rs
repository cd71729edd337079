//! # Wishlist Commands
//!
//! Same shape as the cart commands: validate, dispatch, write through.
//! Adding an id that is already saved keeps the first entry untouched.

use serde::Serialize;
use tracing::debug;

use crate::commands::session::persist_wishlist;
use crate::error::ApiError;
use crate::state::{DbState, StoreState};
use aurum_core::validation::validate_wishlist_item;
use aurum_core::{WishlistAction, WishlistItem, WishlistState};

/// Wishlist response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<WishlistItem>,
    pub count: usize,
    pub is_loading: bool,
}

impl From<&WishlistState> for WishlistResponse {
    fn from(wishlist: &WishlistState) -> Self {
        WishlistResponse {
            items: wishlist.items().to_vec(),
            count: wishlist.len(),
            is_loading: wishlist.is_loading(),
        }
    }
}

/// Gets the current wishlist.
pub fn get_wishlist(store: &StoreState) -> WishlistResponse {
    debug!("get_wishlist command");
    store.with_state(|s| WishlistResponse::from(s.wishlist()))
}

/// Saves a product. No-op when an entry with the same id exists.
pub async fn add_to_wishlist(
    store: &StoreState,
    db: &DbState,
    item: WishlistItem,
) -> Result<WishlistResponse, ApiError> {
    debug!(id = %item.id, product_id = %item.product_id, "add_to_wishlist command");

    validate_wishlist_item(&item)?;

    let state = store.dispatch(WishlistAction::AddToWishlist(item));

    persist_wishlist(store, db).await?;
    Ok(WishlistResponse::from(state.wishlist()))
}

/// Removes an entry. Removing an absent id is not an error.
pub async fn remove_from_wishlist(
    store: &StoreState,
    db: &DbState,
    id: String,
) -> Result<WishlistResponse, ApiError> {
    debug!(id = %id, "remove_from_wishlist command");

    let state = store.dispatch(WishlistAction::RemoveFromWishlist(id));

    persist_wishlist(store, db).await?;
    Ok(WishlistResponse::from(state.wishlist()))
}

/// Empties the wishlist.
pub async fn clear_wishlist(store: &StoreState, db: &DbState) -> Result<WishlistResponse, ApiError> {
    debug!("clear_wishlist command");

    let state = store.dispatch(WishlistAction::ClearWishlist);

    persist_wishlist(store, db).await?;
    Ok(WishlistResponse::from(state.wishlist()))
}

/// Replaces the whole wishlist with `items`, duplicates included.
pub async fn set_wishlist_items(
    store: &StoreState,
    db: &DbState,
    items: Vec<WishlistItem>,
) -> Result<WishlistResponse, ApiError> {
    debug!(count = items.len(), "set_wishlist_items command");

    for item in &items {
        validate_wishlist_item(item)?;
    }

    let state = store.dispatch(WishlistAction::SetWishlistItems(items));

    persist_wishlist(store, db).await?;
    Ok(WishlistResponse::from(state.wishlist()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use aurum_core::Money;
    use aurum_db::{Database, DbConfig};

    async fn setup() -> (StoreState, DbState) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (StoreState::new(), DbState::new(db, "default"))
    }

    fn earrings(name: &str) -> WishlistItem {
        WishlistItem::new(
            "3",
            "earrings-001",
            name,
            Money::from_major(15_000),
            "2024-05-01T10:00:00.000Z",
        )
    }

    #[tokio::test]
    async fn test_add_is_first_write_wins() {
        let (store, db) = setup().await;

        add_to_wishlist(&store, &db, earrings("Pearl Earrings")).await.unwrap();
        let response = add_to_wishlist(&store, &db, earrings("Renamed"))
            .await
            .unwrap();

        assert_eq!(response.count, 1);
        assert_eq!(response.items[0].name, "Pearl Earrings");
        assert_eq!(db.inner().wishlists().count("default").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_name() {
        let (store, db) = setup().await;

        let err = add_to_wishlist(&store, &db, earrings("  ")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_wishlist(&store).count, 0);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let (store, db) = setup().await;
        add_to_wishlist(&store, &db, earrings("Pearl Earrings")).await.unwrap();

        let response = remove_from_wishlist(&store, &db, "3".into()).await.unwrap();
        assert_eq!(response.count, 0);

        add_to_wishlist(&store, &db, earrings("Pearl Earrings")).await.unwrap();
        let response = clear_wishlist(&store, &db).await.unwrap();
        assert!(response.items.is_empty());
        assert!(db.inner().wishlists().load("default").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_keeps_duplicates() {
        let (store, db) = setup().await;
        let items = vec![earrings("Pearl Earrings"), earrings("Pearl Earrings")];

        let response = set_wishlist_items(&store, &db, items.clone()).await.unwrap();

        assert_eq!(response.count, 2);
        assert_eq!(db.inner().wishlists().load("default").await.unwrap(), items);
    }
}
