//! # Commands Module
//!
//! Everything a front-end can ask of the storefront.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── wishlist.rs  ◄─── Wishlist manipulation
//! ├── session.rs   ◄─── Hydrate / persist the session
//! └── theme.rs     ◄─── Design tokens for the current screen
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_to_cart(&store, &db, item)                                         │
//! │         │                                                               │
//! │         ├── validate (aurum_core::validation)                           │
//! │         ├── store.dispatch(CartAction::AddToCart(item))                 │
//! │         ├── write the cart through (aurum_db)                           │
//! │         ▼                                                               │
//! │  Result<CartResponse, ApiError>  (both serialize to JSON)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the store
//! fn get_cart(store: &StoreState) -> CartResponse
//!
//! // Needs the store and the database
//! async fn add_to_cart(store: &StoreState, db: &DbState, item: CartItem)
//!
//! // Only needs configuration
//! fn get_theme(config: &StorefrontConfig) -> ThemeResponse
//! ```

pub mod cart;
pub mod session;
pub mod theme;
pub mod wishlist;
