//! # Session Commands
//!
//! Moves the store's two persisted slices between memory and SQLite.
//!
//! ## Hydration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hydrate_session                                                        │
//! │                                                                         │
//! │  cart/setLoading(true)  wishlist/setLoading(true)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load saved rows (no lock held while awaiting)                          │
//! │       │                                                                 │
//! │       ├── Ok  ──► cart/setCartItems  wishlist/setWishlistItems          │
//! │       └── Err ──► (items untouched)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart/setLoading(false) wishlist/setLoading(false)   ◄── always        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{info, warn};

use crate::commands::cart::CartResponse;
use crate::commands::wishlist::WishlistResponse;
use crate::error::ApiError;
use crate::state::{DbState, StoreState};
use aurum_core::{CartAction, RootState, WishlistAction};
use aurum_db::DbError;

/// Both slices plus the session they belong to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub cart: CartResponse,
    pub wishlist: WishlistResponse,
}

impl SessionResponse {
    pub fn new(session_id: &str, state: &RootState) -> Self {
        SessionResponse {
            session_id: session_id.to_string(),
            cart: CartResponse::from(state.cart()),
            wishlist: WishlistResponse::from(state.wishlist()),
        }
    }
}

/// Loads the saved cart and wishlist into the store.
///
/// Loading flags are raised before the fetch and always lowered after it,
/// even when the fetch fails; on failure the in-memory items are left as
/// they were.
pub async fn hydrate_session(store: &StoreState, db: &DbState) -> Result<SessionResponse, ApiError> {
    let session_id = db.session_id();
    info!(session_id = %session_id, "Hydrating session");

    store.dispatch(CartAction::SetLoading(true));
    store.dispatch(WishlistAction::SetLoading(true));

    let loaded = async {
        let cart = db.inner().carts().load(session_id).await?;
        let wishlist = db.inner().wishlists().load(session_id).await?;
        Ok::<_, DbError>((cart, wishlist))
    }
    .await;

    if let Ok((cart, wishlist)) = &loaded {
        store.dispatch(CartAction::SetCartItems(cart.clone()));
        store.dispatch(WishlistAction::SetWishlistItems(wishlist.clone()));
    }

    store.dispatch(CartAction::SetLoading(false));
    let state = store.dispatch(WishlistAction::SetLoading(false));

    match loaded {
        Ok((cart, wishlist)) => {
            info!(
                session_id = %session_id,
                cart_lines = cart.len(),
                wishlist = wishlist.len(),
                "Session hydrated"
            );
            Ok(SessionResponse::new(session_id, &state))
        }
        Err(e) => {
            warn!(session_id = %session_id, error = %e, "Session hydration failed");
            Err(e.into())
        }
    }
}

/// Writes both slices of the current state to the database.
pub async fn persist_session(store: &StoreState, db: &DbState) -> Result<SessionResponse, ApiError> {
    let _guard = db.lock_writes().await;
    let state = store.snapshot();
    let session_id = db.session_id();

    db.inner().carts().replace(session_id, state.cart().items()).await?;
    db.inner()
        .wishlists()
        .replace(session_id, state.wishlist().items())
        .await?;

    info!(
        session_id = %session_id,
        cart_lines = state.cart().line_count(),
        wishlist = state.wishlist().len(),
        "Session persisted"
    );
    Ok(SessionResponse::new(session_id, &state))
}

/// Writes the cart slice after a cart command.
///
/// Saves the latest snapshot rather than the one the command produced. The
/// snapshot is taken under the session's write lock, so writes commit in the
/// order their snapshots were read and the newest state is the one kept.
pub(crate) async fn persist_cart(store: &StoreState, db: &DbState) -> Result<(), ApiError> {
    let _guard = db.lock_writes().await;
    let items = store.with_state(|s| s.cart().items().to_vec());
    db.inner().carts().replace(db.session_id(), &items).await?;
    Ok(())
}

/// Writes the wishlist slice after a wishlist command.
pub(crate) async fn persist_wishlist(store: &StoreState, db: &DbState) -> Result<(), ApiError> {
    let _guard = db.lock_writes().await;
    let items = store.with_state(|s| s.wishlist().items().to_vec());
    db.inner().wishlists().replace(db.session_id(), &items).await?;
    Ok(())
}
