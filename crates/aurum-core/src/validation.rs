//! # Validation Module
//!
//! Checks a caller may run before dispatching.
//!
//! ## Where Validation Lives
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (TypeScript)                                       │
//! │  ├── Quantity stepper bounds                                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  └── THIS MODULE: id/name/price/quantity rules                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Reducer                                                      │
//! │  └── NO validation. Every action is accepted as-is.                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::validation::{validate_cart_item, validate_quantity};
//! use aurum_core::{CartItem, Money};
//!
//! let item = CartItem::new("1", "ring", "Gold Ring", Money::from_major(25_000), 1);
//! assert!(validate_cart_item(&item).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::cart::CartState;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartItem, WishlistItem};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted line id.
const MAX_ID_LEN: usize = 64;

/// Longest accepted display name.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line or product identifier: non-blank, at most 64 chars.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a display name: non-blank, at most 200 chars.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity: 1 to [`MAX_ITEM_QUANTITY`].
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if !(1..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (complimentary items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates every field of a cart line.
pub fn validate_cart_item(item: &CartItem) -> ValidationResult<()> {
    validate_id("id", &item.id)?;
    validate_id("productId", &item.product_id)?;
    validate_name(&item.name)?;
    validate_price(item.price)?;
    validate_quantity(item.quantity)
}

/// Validates every field of a wishlist entry.
pub fn validate_wishlist_item(item: &WishlistItem) -> ValidationResult<()> {
    validate_id("id", &item.id)?;
    validate_id("productId", &item.product_id)?;
    validate_name(&item.name)?;
    validate_price(item.price)
}

/// Checks that adding `item` to `cart` stays within the caller limits.
///
/// ## Rules
/// - New line: cart must have fewer than [`MAX_CART_ITEMS`] lines
/// - Existing line: merged quantity must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_cart_addition(cart: &CartState, item: &CartItem) -> CoreResult<()> {
    validate_cart_item(item)?;

    match cart.get(&item.id) {
        Some(existing) => {
            let merged = existing.quantity.saturating_add(item.quantity);
            if merged > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
        }
        None => {
            if cart.line_count() >= MAX_CART_ITEMS {
                return Err(CoreError::CartTooLarge {
                    max: MAX_CART_ITEMS,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
