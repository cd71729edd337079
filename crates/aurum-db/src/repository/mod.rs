//! # Repository Module
//!
//! Snapshot repositories for the two persisted store slices.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Persistence                                 │
//! │                                                                         │
//! │  hydrate_session                       persist_session                  │
//! │       │                                      │                          │
//! │       │  db.carts().load("default")          │  db.carts().replace(..)  │
//! │       ▼                                      ▼                          │
//! │  CartRepository / WishlistRepository                                   │
//! │  ├── load(&self, session_id)      → items in display order             │
//! │  ├── replace(&self, session_id, items)  → one transaction              │
//! │  ├── clear(&self, session_id)                                          │
//! │  └── count(&self, session_id)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are whole-list snapshots. There is no per-line update path: the
//! reducers own all merge semantics and the database only mirrors their
//! output.
//!
//! ## Available Repositories
//!
//! - [`cart::CartRepository`] - Cart line snapshots
//! - [`wishlist::WishlistRepository`] - Wishlist entry snapshots

pub mod cart;
pub mod wishlist;
