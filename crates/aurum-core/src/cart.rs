//! # Cart Slice
//!
//! Cart state, the actions that change it, and the reducer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Actions                                         │
//! │                                                                         │
//! │  Action                   State Change                  Totals          │
//! │  ──────                   ────────────                  ──────          │
//! │                                                                         │
//! │  addToCart(item) ───────► same id? qty += item.qty      recompute      │
//! │                           else items.push(item)                         │
//! │                                                                         │
//! │  removeFromCart(id) ────► items.retain(id != ..)        recompute      │
//! │                                                                         │
//! │  updateQuantity(id, q) ─► items[id].qty = q             recompute      │
//! │                           (absent id: nothing)          (only if hit)  │
//! │                                                                         │
//! │  clearCart() ───────────► items = []                    zeroed         │
//! │                                                                         │
//! │  setCartItems(items) ───► items = items                 recompute      │
//! │                                                                         │
//! │  setLoading(flag) ──────► is_loading = flag             untouched      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `total_items == Σ quantity`
//! - `total_amount == Σ price × quantity`
//!
//! Both are recomputed with a full fold after every structural change.
//! The fields are private, so nothing outside this module can desync them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CartItem;

// =============================================================================
// Cart Action
// =============================================================================

/// Everything that can happen to a cart.
///
/// Serialized Redux-style: `{ "type": "updateQuantity", "payload": { "id": "1", "quantity": 2 } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum CartAction {
    /// Merge by id (quantity is added) or append.
    AddToCart(CartItem),
    /// Drop every line with this id.
    RemoveFromCart(String),
    /// Overwrite one line's quantity.
    UpdateQuantity {
        id: String,
        #[ts(type = "number")]
        quantity: i64,
    },
    /// Empty the cart.
    ClearCart,
    /// Replace all lines, e.g. after a remote fetch.
    SetCartItems(Vec<CartItem>),
    /// Busy indicator for a pending fetch.
    SetLoading(bool),
}

impl CartAction {
    /// Stable action name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "addToCart",
            CartAction::RemoveFromCart(_) => "removeFromCart",
            CartAction::UpdateQuantity { .. } => "updateQuantity",
            CartAction::ClearCart => "clearCart",
            CartAction::SetCartItems(_) => "setCartItems",
            CartAction::SetLoading(_) => "setLoading",
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    /// Lines in arrival order (display order).
    items: Vec<CartItem>,

    /// Σ quantity.
    #[ts(type = "number")]
    total_items: i64,

    /// Σ price × quantity.
    total_amount: Money,

    /// Set by whoever is fetching; opaque here.
    is_loading: bool,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Creates a cart holding `items`, with totals computed.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = CartState::new();
        cart.set_cart_items(items);
        cart
    }

    /// Applies one action in place.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddToCart(item) => self.add_to_cart(item),
            CartAction::RemoveFromCart(id) => self.remove_from_cart(&id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
            CartAction::ClearCart => self.clear_cart(),
            CartAction::SetCartItems(items) => self.set_cart_items(items),
            CartAction::SetLoading(flag) => self.set_loading(flag),
        }
    }

    /// Adds a line, or increases the quantity of the line with the same id.
    ///
    /// ## Behavior
    /// - Line already present: `quantity += item.quantity`; name, price,
    ///   image and variant of the existing line are kept
    /// - Line not present: appended at the end
    /// - Zero or negative quantities go through unchanged
    /// - The merged quantity saturates at `i64::MAX`
    pub fn add_to_cart(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }

        self.recalculate_totals();
    }

    /// Removes every line with `id`. Absent id leaves the lines as they are.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
        self.recalculate_totals();
    }

    /// Sets the quantity of the line with `id` to exactly `quantity`.
    ///
    /// Not additive. Absent id is a no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
            self.recalculate_totals();
        }
    }

    /// Empties the cart and zeroes both totals.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.total_items = 0;
        self.total_amount = Money::zero();
    }

    /// Replaces every line with `items`.
    pub fn set_cart_items(&mut self, items: Vec<CartItem>) {
        self.items = items;
        self.recalculate_totals();
    }

    /// Sets the busy indicator. Items and totals are untouched.
    pub fn set_loading(&mut self, flag: bool) {
        self.is_loading = flag;
    }

    /// Single pass over the lines producing both totals. Both sums saturate.
    fn recalculate_totals(&mut self) {
        let (total_items, total_amount) = self
            .items
            .iter()
            .fold((0_i64, Money::zero()), |(count, amount), item| {
                (count.saturating_add(item.quantity), amount + item.line_total())
            });

        self.total_items = total_items;
        self.total_amount = total_amount;
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Lines in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up a line by id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Σ quantity.
    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Σ price × quantity.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pure reducer: `(state, action) -> state`.
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    state.apply(action);
    state
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    #[ts(type = "number")]
    pub total_items: i64,
    pub total_amount: Money,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_amount: cart.total_amount(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, quantity: i64) -> CartItem {
        CartItem::new(id, format!("product-{}", id), format!("Item {}", id), Money::from_minor(price), quantity)
    }

    fn assert_totals_consistent(cart: &CartState) {
        let count: i64 = cart.items().iter().map(|i| i.quantity).sum();
        let amount: Money = cart.items().iter().map(CartItem::line_total).sum();
        assert_eq!(cart.total_items(), count);
        assert_eq!(cart.total_amount(), amount);
    }

    #[test]
    fn test_worked_example() {
        let cart = reduce(CartState::new(), CartAction::AddToCart(item("1", 100, 2)));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_amount().minor(), 200);

        let cart = reduce(cart, CartAction::AddToCart(item("1", 100, 3)));
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_amount().minor(), 500);
        assert_eq!(cart.line_count(), 1);

        let cart = reduce(
            cart,
            CartAction::UpdateQuantity {
                id: "1".to_string(),
                quantity: 1,
            },
        );
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_amount().minor(), 100);
    }

    #[test]
    fn test_add_merges_quantity_but_keeps_existing_fields() {
        let mut cart = CartState::new();
        cart.add_to_cart(item("1", 100, 1).with_variant("Size 6"));

        let mut repriced = item("1", 999, 4);
        repriced.name = "Renamed".to_string();
        cart.add_to_cart(repriced);

        let line = cart.get("1").unwrap();
        assert_eq!(line.quantity, 5);
        assert_eq!(line.price.minor(), 100);
        assert_eq!(line.name, "Item 1");
        assert_eq!(line.variant.as_deref(), Some("Size 6"));
        assert_eq!(cart.total_amount().minor(), 500);
    }

    #[test]
    fn test_add_preserves_arrival_order() {
        let mut cart = CartState::new();
        cart.add_to_cart(item("b", 10, 1));
        cart.add_to_cart(item("a", 10, 1));
        cart.add_to_cart(item("c", 10, 1));
        cart.add_to_cart(item("a", 10, 1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_add_accepts_zero_and_negative_quantities() {
        let mut cart = CartState::new();
        cart.add_to_cart(item("1", 100, 0));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 0);

        cart.add_to_cart(item("2", 50, -3));
        assert_eq!(cart.total_items(), -3);
        assert_eq!(cart.total_amount().minor(), -150);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_total_items_is_sum_of_dispatched_quantities() {
        let adds = [("1", 3), ("2", 1), ("1", 4), ("3", 2), ("2", 5)];
        let cart = adds.iter().fold(CartState::new(), |cart, (id, qty)| {
            reduce(cart, CartAction::AddToCart(item(id, 10, *qty)))
        });

        let dispatched: i64 = adds.iter().map(|(_, q)| q).sum();
        assert_eq!(cart.total_items(), dispatched);
        assert_eq!(cart.get("1").unwrap().quantity, 7);
        assert_eq!(cart.get("2").unwrap().quantity, 6);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartState::from_items(vec![item("1", 100, 2), item("2", 40, 1)]);

        cart.remove_from_cart("1");
        let after_first = cart.clone();
        cart.remove_from_cart("1");

        assert_eq!(cart, after_first);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_amount().minor(), 40);
    }

    #[test]
    fn test_remove_drops_every_line_with_the_id() {
        let mut cart = CartState::from_items(vec![item("1", 100, 1), item("2", 5, 1), item("1", 100, 2)]);
        assert_eq!(cart.total_items(), 4);

        cart.remove_from_cart("1");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_amount().minor(), 5);
    }

    #[test]
    fn test_update_quantity_overwrites_not_adds() {
        let mut cart = CartState::from_items(vec![item("1", 100, 2)]);

        cart.update_quantity("1", 7);
        cart.update_quantity("1", 3);

        assert_eq!(cart.get("1").unwrap().quantity, 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_amount().minor(), 300);
    }

    #[test]
    fn test_update_quantity_on_absent_id_is_noop() {
        let mut cart = CartState::from_items(vec![item("1", 100, 2)]);
        let before = cart.clone();

        cart.update_quantity("missing", 10);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_accepts_negative() {
        let mut cart = CartState::from_items(vec![item("1", 100, 2)]);
        cart.update_quantity("1", -1);
        assert_eq!(cart.total_items(), -1);
        assert_eq!(cart.total_amount().minor(), -100);
    }

    #[test]
    fn test_clear_cart_always_zeroes() {
        let mut cart = CartState::from_items(vec![item("1", 100, 2), item("2", 300, 1)]);
        cart.set_loading(true);

        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_amount().is_zero());
        assert!(cart.is_loading());

        cart.clear_cart();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_cart_items_replaces_wholesale() {
        let mut cart = CartState::from_items(vec![item("old", 1000, 9)]);
        cart.set_cart_items(vec![item("1", 100, 1), item("2", 250, 2)]);

        assert!(cart.get("old").is_none());
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_amount().minor(), 600);
    }

    #[test]
    fn test_set_loading_leaves_items_and_totals() {
        let mut cart = CartState::from_items(vec![item("1", 100, 2)]);
        cart.set_loading(true);

        assert!(cart.is_loading());
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_amount().minor(), 200);
    }

    #[test]
    fn test_huge_quantities_do_not_panic() {
        let cart = reduce(CartState::new(), CartAction::AddToCart(item("1", 100, i64::MAX)));
        let cart = reduce(cart, CartAction::AddToCart(item("1", 100, 1)));
        assert_eq!(cart.get("1").map(|i| i.quantity), Some(i64::MAX));
        assert_eq!(cart.total_items(), i64::MAX);
        assert_eq!(cart.total_amount(), Money::from_minor(i64::MAX));

        let necklace = CartItem::new("2", "n", "Necklace", Money::from_major(85_000), 2_000_000_000_000);
        let cart = reduce(cart, CartAction::AddToCart(necklace));
        assert_eq!(cart.total_items(), i64::MAX);
        assert_eq!(cart.total_amount(), Money::from_minor(i64::MAX));

        let cart = reduce(
            cart,
            CartAction::UpdateQuantity {
                id: "1".to_string(),
                quantity: i64::MIN,
            },
        );
        assert_eq!(cart.line_count(), 2);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_action_json_shape() {
        let action = CartAction::UpdateQuantity {
            id: "1".to_string(),
            quantity: 2,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "updateQuantity");
        assert_eq!(json["payload"]["quantity"], 2);

        let clear: CartAction = serde_json::from_str(r#"{"type":"clearCart"}"#).unwrap();
        assert_eq!(clear, CartAction::ClearCart);
        assert_eq!(clear.name(), "clearCart");
    }

    #[test]
    fn test_state_serializes_derived_fields() {
        let cart = CartState::from_items(vec![item("1", 10_000, 2)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["totalItems"], 2);
        assert_eq!(json["totalAmount"], 200);
        assert_eq!(json["isLoading"], false);
        assert_eq!(json["items"][0]["id"], "1");
    }

    #[test]
    fn test_totals_from_state() {
        let cart = CartState::from_items(vec![item("1", 100, 2), item("2", 50, 1)]);
        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_amount.minor(), 250);
    }
}
