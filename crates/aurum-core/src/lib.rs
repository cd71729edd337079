//! # aurum-core: Pure Storefront State for Aurum
//!
//! This crate is the **heart** of the Aurum jewelry storefront. It holds the
//! cart and wishlist state as plain data plus pure reducers over it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (React Native)                    │   │
//! │  │     Home ──► Product Card ──► Cart Drawer ──► Wishlist          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ actions / snapshots                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 aurum-storefront (commands)                     │   │
//! │  │     add_to_cart, update_cart_item, add_to_wishlist, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aurum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │ wishlist  │  │   store   │  │   theme   │  │   │
//! │  │   │ CartState │  │ Wishlist  │  │ RootState │  │  tokens   │  │   │
//! │  │   │ CartAction│  │  State    │  │  reduce   │  │ responsive│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    aurum-db (Persistence)                       │   │
//! │  │              SQLite cart / wishlist repositories                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line item types (`CartItem`, `WishlistItem`)
//! - [`money`] - Money type with integer minor units
//! - [`cart`] - Cart slice: state, actions, reducer
//! - [`wishlist`] - Wishlist slice: state, actions, reducer
//! - [`store`] - Root state and the combined reducer
//! - [`theme`] - Design tokens and responsive scaling
//! - [`validation`] - Optional checks callers run before dispatching
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Reducers are total**: no action can fail; unknown ids are no-ops
//! 2. **Derived totals**: cart totals are recomputed from items, never patched
//! 3. **Integer Money**: all prices are minor units (i64)
//! 4. **Snapshots**: readers get clones, writers go through actions
//!
//! ## Example Usage
//!
//! ```rust
//! use aurum_core::{CartAction, CartItem, CartState, Money};
//!
//! let ring = CartItem::new("1", "ring-18k", "Gold Ring", Money::from_minor(100), 2);
//!
//! let cart = aurum_core::cart::reduce(CartState::default(), CartAction::AddToCart(ring.clone()));
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_amount().minor(), 200);
//!
//! let cart = aurum_core::cart::reduce(cart, CartAction::AddToCart(ring.with_quantity(3)));
//! assert_eq!(cart.total_items(), 5);
//! assert_eq!(cart.total_amount().minor(), 500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod store;
pub mod theme;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartState, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{Action, RootState};
pub use types::{CartItem, WishlistItem};
pub use wishlist::{WishlistAction, WishlistState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Session key used when the caller has no signed-in shopper.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Maximum distinct lines a caller should allow in one cart.
///
/// Only enforced by callers through [`validation`]; the reducer accepts
/// anything it is given.
pub const MAX_CART_ITEMS: usize = 50;

/// Maximum quantity of a single line.
///
/// ## Business Reason
/// Jewelry orders are small; anything above this is almost certainly a
/// typo on the quantity stepper.
pub const MAX_ITEM_QUANTITY: i64 = 99;
