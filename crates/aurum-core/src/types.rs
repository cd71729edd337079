//! # Line Item Types
//!
//! The two item shapes the storefront keeps in client-side state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item Types                                      │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      CartItem       │          │    WishlistItem     │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  id        (line)   │          │  id        (line)   │              │
//! │  │  product_id         │          │  product_id         │              │
//! │  │  name               │          │  name               │              │
//! │  │  price     (Money)  │          │  price     (Money)  │              │
//! │  │  quantity  (i64)    │          │  image?             │              │
//! │  │  image?             │          │  added_at (ISO)     │              │
//! │  │  variant?           │          └─────────────────────┘              │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: identifies the line inside one cart/wishlist; merges and removals
//!   key on it
//! - `product_id`: points at a catalog entry; never checked here

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Line identifier, unique within a cart.
    pub id: String,

    /// Catalog reference.
    pub product_id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Quantity. Positive in practice; the reducer does not check.
    #[ts(type = "number")]
    pub quantity: i64,

    /// Image reference (URL or asset key).
    #[serde(default)]
    pub image: Option<String>,

    /// Variant label, e.g. "18K / Size 7".
    #[serde(default)]
    pub variant: Option<String>,
}

impl CartItem {
    /// Creates a cart line without image or variant.
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        CartItem {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
            image: None,
            variant: None,
        }
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the variant label.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Returns a copy carrying a different quantity.
    ///
    /// Handy for dispatching a second `addToCart` for the same line.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Wishlist Item
// =============================================================================

/// A saved product on the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WishlistItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
    /// When the shopper saved it (ISO-8601). Display only: list order is
    /// insertion order, not this field.
    pub added_at: String,
}

impl WishlistItem {
    /// Creates a wishlist entry with an explicit `added_at`.
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        added_at: impl Into<String>,
    ) -> Self {
        WishlistItem {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: None,
            added_at: added_at.into(),
        }
    }

    /// Creates a wishlist entry stamped with the current UTC time.
    ///
    /// Same format as JavaScript's `Date.toISOString()`.
    pub fn stamped(
        id: impl Into<String>,
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        WishlistItem::new(id, product_id, name, price, now)
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem::new("1", "ring", "Gold Ring", Money::from_minor(100), 3);
        assert_eq!(item.line_total().minor(), 300);

        let negative = item.with_quantity(-2);
        assert_eq!(negative.line_total().minor(), -200);
    }

    #[test]
    fn test_cart_item_json_uses_camel_case() {
        let item = CartItem::new("1", "ring-18k", "Gold Ring", Money::from_major(25_000), 1)
            .with_variant("Size 7");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["productId"], "ring-18k");
        assert_eq!(json["price"], 25000);
        assert_eq!(json["variant"], "Size 7");
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_cart_item_optional_fields_may_be_absent() {
        let json = r#"{"id":"1","productId":"p","name":"Bangle","price":1499.5,"quantity":2}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, Money::from_minor(149_950));
        assert_eq!(item.image, None);
        assert_eq!(item.variant, None);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_stamped_wishlist_item_is_iso_utc() {
        let item = WishlistItem::stamped("w1", "p1", "Pearl Earrings", Money::from_major(15_000));
        assert!(item.added_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&item.added_at).is_ok());
    }
}
