//! # Root State
//!
//! Combines the cart and wishlist slices behind one action type.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Root Reducer                                         │
//! │                                                                         │
//! │   Action::Cart(a) ─────────► cart::reduce(state.cart, a)               │
//! │   Action::Wishlist(a) ─────► wishlist::reduce(state.wishlist, a)       │
//! │                                                                         │
//! │   replay(initial, [a1, a2, ...]) = reduce(...reduce(initial, a1)...)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Actions are plain data, so a recorded log replays to the same state.
//!
//! ## Example
//! ```rust
//! use aurum_core::store::{self, Action};
//! use aurum_core::RootState;
//!
//! let json = r#"{"slice":"cart","action":{"type":"setLoading","payload":true}}"#;
//! let action: Action = json.parse().unwrap();
//! assert_eq!(action.to_string(), "cart/setLoading");
//!
//! let state = store::reduce(RootState::default(), action);
//! assert!(state.cart().is_loading());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::cart::{CartAction, CartState};
use crate::error::CoreError;
use crate::wishlist::{WishlistAction, WishlistState};

/// An action addressed to one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "slice", content = "action", rename_all = "camelCase")]
#[ts(export)]
pub enum Action {
    Cart(CartAction),
    Wishlist(WishlistAction),
}

impl Action {
    /// Slice name: `cart` or `wishlist`.
    pub fn slice(&self) -> &'static str {
        match self {
            Action::Cart(_) => "cart",
            Action::Wishlist(_) => "wishlist",
        }
    }

    /// Action name within the slice.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Cart(action) => action.name(),
            Action::Wishlist(action) => action.name(),
        }
    }
}

/// `cart/addToCart`, `wishlist/clearWishlist`, ...
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.slice(), self.name())
    }
}

/// Parses the JSON form `{ "slice": ..., "action": { "type": ..., "payload": ... } }`.
impl FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<CartAction> for Action {
    fn from(action: CartAction) -> Self {
        Action::Cart(action)
    }
}

impl From<WishlistAction> for Action {
    fn from(action: WishlistAction) -> Self {
        Action::Wishlist(action)
    }
}

/// The whole client-side state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RootState {
    cart: CartState,
    wishlist: WishlistState,
}

impl RootState {
    pub fn new(cart: CartState, wishlist: WishlistState) -> Self {
        RootState { cart, wishlist }
    }

    /// Routes the action to its slice.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Cart(action) => self.cart.apply(action),
            Action::Wishlist(action) => self.wishlist.apply(action),
        }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn wishlist(&self) -> &WishlistState {
        &self.wishlist
    }
}

/// Pure reducer: `(state, action) -> state`.
pub fn reduce(mut state: RootState, action: Action) -> RootState {
    state.apply(action);
    state
}

/// Folds `actions` over `initial` in order.
pub fn replay<I>(initial: RootState, actions: I) -> RootState
where
    I: IntoIterator<Item = Action>,
{
    actions.into_iter().fold(initial, reduce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{CartItem, WishlistItem};

    fn ring(quantity: i64) -> CartItem {
        CartItem::new("1", "ring-18k", "Gold Ring", Money::from_minor(100), quantity)
    }

    #[test]
    fn test_actions_route_to_their_slice() {
        let state = reduce(RootState::default(), CartAction::SetLoading(true).into());
        assert!(state.cart().is_loading());
        assert!(!state.wishlist().is_loading());

        let state = reduce(state, WishlistAction::SetLoading(true).into());
        assert!(state.wishlist().is_loading());
    }

    #[test]
    fn test_replay_is_deterministic() {
        let log: Vec<Action> = vec![
            CartAction::AddToCart(ring(2)).into(),
            WishlistAction::AddToWishlist(WishlistItem::new(
                "w1",
                "necklace",
                "Diamond Necklace",
                Money::from_major(85_000),
                "2024-01-01T00:00:00.000Z",
            ))
            .into(),
            CartAction::AddToCart(ring(3)).into(),
            CartAction::UpdateQuantity {
                id: "1".to_string(),
                quantity: 1,
            }
            .into(),
        ];

        let first = replay(RootState::default(), log.clone());
        let second = replay(RootState::default(), log);

        assert_eq!(first, second);
        assert_eq!(first.cart().total_items(), 1);
        assert_eq!(first.cart().total_amount().minor(), 100);
        assert_eq!(first.wishlist().len(), 1);
    }

    #[test]
    fn test_each_dispatch_recomputes_from_latest_state() {
        let state = replay(
            RootState::default(),
            vec![
                CartAction::AddToCart(ring(2)).into(),
                CartAction::RemoveFromCart("1".to_string()).into(),
                CartAction::AddToCart(ring(4)).into(),
            ],
        );
        assert_eq!(state.cart().total_items(), 4);
        assert_eq!(state.cart().total_amount().minor(), 400);
    }

    #[test]
    fn test_action_json_round_trip_through_log() {
        let log = vec![
            Action::from(CartAction::AddToCart(ring(2))),
            Action::from(CartAction::ClearCart),
            Action::from(WishlistAction::ClearWishlist),
        ];
        let json = serde_json::to_string(&log).unwrap();
        let parsed: Vec<Action> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn test_parse_and_display() {
        let action: Action = r#"{"slice":"wishlist","action":{"type":"clearWishlist"}}"#
            .parse()
            .unwrap();
        assert_eq!(action, Action::Wishlist(WishlistAction::ClearWishlist));
        assert_eq!(action.to_string(), "wishlist/clearWishlist");
    }

    #[test]
    fn test_parse_rejects_unknown_action() {
        let err = r#"{"slice":"auth","action":{"type":"login"}}"#
            .parse::<Action>()
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidAction(_)));
    }
}
