//! # aurum-db: Persistence for the Aurum Storefront
//!
//! The store in `aurum-core` never does I/O. This crate is the collaborator
//! that fetches saved carts/wishlists before `setCartItems` /
//! `setWishlistItems` is dispatched, and writes snapshots back afterwards.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum Data Flow                                  │
//! │                                                                         │
//! │  Storefront command (hydrate_session / persist_session)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     aurum-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  cart.rs      │    │  (embedded)  │  │   │
//! │  │   │               │◄───│  wishlist.rs  │    │ 001_init.sql │  │   │
//! │  │   │ SqlitePool    │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <data dir>/aurum.db                                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurum_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("aurum.db")).await?;
//!
//! let items = db.carts().load("default").await?;
//! db.carts().replace("default", &items).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::cart::CartRepository;
pub use repository::wishlist::WishlistRepository;
