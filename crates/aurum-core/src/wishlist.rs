//! # Wishlist Slice
//!
//! Saved products. Simpler than the cart: no quantities, no totals, and a
//! duplicate add is dropped rather than merged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::WishlistItem;

/// Everything that can happen to a wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum WishlistAction {
    /// Append unless the id is already saved (first write wins).
    AddToWishlist(WishlistItem),
    RemoveFromWishlist(String),
    SetWishlistItems(Vec<WishlistItem>),
    ClearWishlist,
    SetLoading(bool),
}

impl WishlistAction {
    /// Stable action name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            WishlistAction::AddToWishlist(_) => "addToWishlist",
            WishlistAction::RemoveFromWishlist(_) => "removeFromWishlist",
            WishlistAction::SetWishlistItems(_) => "setWishlistItems",
            WishlistAction::ClearWishlist => "clearWishlist",
            WishlistAction::SetLoading(_) => "setLoading",
        }
    }
}

/// The wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WishlistState {
    items: Vec<WishlistItem>,
    is_loading: bool,
}

impl WishlistState {
    pub fn new() -> Self {
        WishlistState::default()
    }

    /// Creates a wishlist holding `items` as given.
    pub fn from_items(items: Vec<WishlistItem>) -> Self {
        WishlistState {
            items,
            is_loading: false,
        }
    }

    /// Applies one action in place.
    pub fn apply(&mut self, action: WishlistAction) {
        match action {
            WishlistAction::AddToWishlist(item) => self.add_to_wishlist(item),
            WishlistAction::RemoveFromWishlist(id) => self.remove_from_wishlist(&id),
            WishlistAction::SetWishlistItems(items) => self.set_wishlist_items(items),
            WishlistAction::ClearWishlist => self.clear_wishlist(),
            WishlistAction::SetLoading(flag) => self.set_loading(flag),
        }
    }

    /// Saves `item` unless an entry with the same id exists.
    ///
    /// A duplicate is ignored outright: the stored entry keeps its name,
    /// price and `added_at`.
    pub fn add_to_wishlist(&mut self, item: WishlistItem) {
        if !self.contains(&item.id) {
            self.items.push(item);
        }
    }

    pub fn remove_from_wishlist(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Wholesale replace. Duplicates in `items` are kept as given.
    pub fn set_wishlist_items(&mut self, items: Vec<WishlistItem>) {
        self.items = items;
    }

    pub fn clear_wishlist(&mut self) {
        self.items.clear();
    }

    pub fn set_loading(&mut self, flag: bool) {
        self.is_loading = flag;
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    /// Whether an entry with `id` is saved.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pure reducer: `(state, action) -> state`.
pub fn reduce(mut state: WishlistState, action: WishlistAction) -> WishlistState {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn saved(id: &str, name: &str, price: i64) -> WishlistItem {
        WishlistItem::new(id, format!("product-{}", id), name, Money::from_minor(price), "2024-01-01T00:00:00.000Z")
    }

    #[test]
    fn test_duplicate_add_first_write_wins() {
        let mut wishlist = WishlistState::new();
        wishlist.add_to_wishlist(saved("1", "Diamond Necklace", 8_500_000));

        let mut later = saved("1", "Renamed", 1);
        later.added_at = "2025-06-01T00:00:00.000Z".to_string();
        wishlist.add_to_wishlist(later);

        assert_eq!(wishlist.len(), 1);
        let entry = &wishlist.items()[0];
        assert_eq!(entry.name, "Diamond Necklace");
        assert_eq!(entry.price.minor(), 8_500_000);
        assert_eq!(entry.added_at, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_insertion_order_not_timestamp_order() {
        let mut newer = saved("a", "A", 1);
        newer.added_at = "2030-01-01T00:00:00.000Z".to_string();

        let wishlist = [newer, saved("b", "B", 1)]
            .into_iter()
            .fold(WishlistState::new(), |w, item| reduce(w, WishlistAction::AddToWishlist(item)));

        let ids: Vec<&str> = wishlist.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = WishlistState::from_items(vec![saved("1", "Ring", 100)]);
        wishlist.remove_from_wishlist("missing");
        assert_eq!(wishlist.len(), 1);

        wishlist.remove_from_wishlist("1");
        wishlist.remove_from_wishlist("1");
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_set_and_clear() {
        let mut wishlist = WishlistState::from_items(vec![saved("old", "Old", 1)]);
        wishlist.set_wishlist_items(vec![saved("1", "Ring", 100), saved("2", "Bangle", 200)]);
        assert!(!wishlist.contains("old"));
        assert_eq!(wishlist.len(), 2);

        wishlist.set_loading(true);
        wishlist.clear_wishlist();
        assert!(wishlist.is_empty());
        assert!(wishlist.is_loading());
    }

    #[test]
    fn test_action_json_shape() {
        let action: WishlistAction =
            serde_json::from_str(r#"{"type":"removeFromWishlist","payload":"7"}"#).unwrap();
        assert_eq!(action, WishlistAction::RemoveFromWishlist("7".to_string()));
        assert_eq!(action.name(), "removeFromWishlist");
    }
}
