//! # Cart Commands
//!
//! Typed entry points over the cart slice. Each mutating command validates,
//! dispatches, then writes the cart through to the database.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart      ┌──────────┐   clear_cart  ┌────────┐ │
//! │  │  Empty   │──────────────────►│ In Cart  │──────────────►│ Empty  │ │
//! │  │  Cart    │                    │          │               │        │ │
//! │  └──────────┘                    └──────────┘               └────────┘ │
//! │                                     │    ▲                              │
//! │                        update_cart_item  │ add_to_cart (merges by id)   │
//! │                        remove_from_cart ─┘                              │
//! │                                                                         │
//! │  set_cart_items replaces everything (used by hydration and restores)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer accepts any payload. The limits enforced here
//! (`MAX_ITEM_QUANTITY`, `MAX_CART_ITEMS`, non-blank ids) belong to these
//! commands only; a raw `dispatch` bypasses them.

use serde::Serialize;
use tracing::debug;

use crate::commands::session::persist_cart;
use crate::error::ApiError;
use crate::state::{DbState, StoreState};
use aurum_core::validation::{validate_cart_addition, validate_cart_item, validate_quantity};
use aurum_core::{
    CartAction, CartItem, CartState, CartTotals, CoreError, RootState, MAX_CART_ITEMS,
};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    /// `totals.total_amount` formatted for display, e.g. "₹1,25,000".
    pub formatted_total: String,
    pub is_loading: bool,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            formatted_total: cart.total_amount().format_inr(),
            is_loading: cart.is_loading(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_state(|s| CartResponse::from(s.cart()))
}

/// Adds a line to the cart, or merges into the line with the same id.
///
/// ## Behavior
/// - Same id already in cart: quantities add, stored name/price are kept
/// - New id: appended at the end
/// - Merged quantity above 99 or a 51st line is rejected
pub async fn add_to_cart(
    store: &StoreState,
    db: &DbState,
    item: CartItem,
) -> Result<CartResponse, ApiError> {
    debug!(
        id = %item.id,
        product_id = %item.product_id,
        quantity = item.quantity,
        "add_to_cart command"
    );

    validate_cart_item(&item)?;

    let check_item = item.clone();
    let state = store.dispatch_checked(CartAction::AddToCart(item), |s| {
        validate_cart_addition(s.cart(), &check_item)
    })?;

    persist_cart(store, db).await?;
    Ok(CartResponse::from(state.cart()))
}

/// Sets a line's quantity. A quantity of zero or less removes the line.
///
/// ## Errors
/// - `NOT_FOUND` when no line has `id`
/// - `VALIDATION_ERROR` when `quantity` is above 99
pub async fn update_cart_item(
    store: &StoreState,
    db: &DbState,
    id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(id = %id, quantity = quantity, "update_cart_item command");

    let exists = |s: &RootState| {
        if s.cart().get(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("Cart item", &id))
        }
    };

    let state = if quantity <= 0 {
        store.dispatch_checked(CartAction::RemoveFromCart(id.clone()), exists)?
    } else {
        validate_quantity(quantity)?;
        store.dispatch_checked(
            CartAction::UpdateQuantity {
                id: id.clone(),
                quantity,
            },
            exists,
        )?
    };

    persist_cart(store, db).await?;
    Ok(CartResponse::from(state.cart()))
}

/// Removes a line. Removing an absent id is not an error.
pub async fn remove_from_cart(
    store: &StoreState,
    db: &DbState,
    id: String,
) -> Result<CartResponse, ApiError> {
    debug!(id = %id, "remove_from_cart command");

    let state = store.dispatch(CartAction::RemoveFromCart(id));

    persist_cart(store, db).await?;
    Ok(CartResponse::from(state.cart()))
}

/// Clears the cart.
pub async fn clear_cart(store: &StoreState, db: &DbState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let state = store.dispatch(CartAction::ClearCart);

    persist_cart(store, db).await?;
    Ok(CartResponse::from(state.cart()))
}

/// Replaces the whole cart with `items`, kept in the given order.
///
/// Duplicate ids are kept as separate lines, exactly as the reducer does.
pub async fn set_cart_items(
    store: &StoreState,
    db: &DbState,
    items: Vec<CartItem>,
) -> Result<CartResponse, ApiError> {
    debug!(count = items.len(), "set_cart_items command");

    if items.len() > MAX_CART_ITEMS {
        return Err(CoreError::CartTooLarge {
            max: MAX_CART_ITEMS,
        }
        .into());
    }
    for item in &items {
        validate_cart_item(item)?;
    }

    let state = store.dispatch(CartAction::SetCartItems(items));

    persist_cart(store, db).await?;
    Ok(CartResponse::from(state.cart()))
}
