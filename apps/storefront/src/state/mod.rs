//! # State Module
//!
//! Application state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   DbState    │  │   StoreState     │  │ StorefrontConfig │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Database    │  │  Arc<Mutex<      │  │  session_id      │          │
//! │  │  session_id  │  │    RootState>>   │  │  screen          │          │
//! │  │              │  │  subscribers     │  │  store_name      │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • StoreState: Protected by Arc<Mutex<T>>; one dispatch at a time      │
//! │  • StorefrontConfig: Read-only after initialization                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod db;
mod store;

pub use db::DbState;
pub use store::{StoreState, SubscriptionId};
