//! # Store State
//!
//! Owns the one `RootState` and serializes every dispatch through a mutex.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(action)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock ─► RootState::apply(action) ─► clone snapshot ─► unlock           │
//! │                                                           │             │
//! │                                                           ▼             │
//! │                                  notify subscribers (lock NOT held)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer call runs entirely under the lock, so no reader ever sees a
//! half-applied action and concurrent dispatches apply one after another.
//! Subscribers run after the lock is released and may read or dispatch.
//!
//! A panic while the lock is held poisons it. The reducers leave the state
//! consistent at every step, so the guard is recovered instead of
//! propagating the panic to every later caller.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use aurum_core::{Action, RootState};

type Listener = Arc<dyn Fn(&RootState) + Send + Sync>;

/// Handle returned by [`StoreState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Thread-safe owner of the client-side state.
///
/// Cloning shares the same store.
pub struct StoreState {
    state: Arc<Mutex<RootState>>,
    listeners: Arc<Mutex<Vec<(SubscriptionId, Listener)>>>,
    next_id: Arc<AtomicU64>,
}

impl StoreState {
    /// Creates a store holding the initial (empty, not loading) state.
    pub fn new() -> Self {
        Self::from_state(RootState::default())
    }

    /// Creates a store holding `initial`.
    pub fn from_state(initial: RootState) -> Self {
        StoreState {
            state: Arc::new(Mutex::new(initial)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RootState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `action` and returns the resulting snapshot.
    pub fn dispatch(&self, action: impl Into<Action>) -> RootState {
        let action = action.into();
        let label = action.to_string();

        let snapshot = {
            let mut state = self.lock();
            state.apply(action);
            state.clone()
        };

        log_dispatch(&label, &snapshot);
        self.notify(&snapshot);
        snapshot
    }

    /// Runs `check` against the current state and dispatches `action` only
    /// if it passes, without releasing the lock in between.
    ///
    /// Used by commands whose validation depends on what is already in the
    /// store (merged quantity, line limit, line exists).
    pub fn dispatch_checked<E, F>(&self, action: impl Into<Action>, check: F) -> Result<RootState, E>
    where
        F: FnOnce(&RootState) -> Result<(), E>,
    {
        let action = action.into();
        let label = action.to_string();

        let snapshot = {
            let mut state = self.lock();
            check(&state)?;
            state.apply(action);
            state.clone()
        };

        log_dispatch(&label, &snapshot);
        self.notify(&snapshot);
        Ok(snapshot)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> RootState {
        self.lock().clone()
    }

    /// Reads the state without cloning it.
    ///
    /// Don't dispatch from inside `f`: the lock is held.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RootState) -> R,
    {
        let state = self.lock();
        f(&state)
    }

    /// Registers `listener`, called with the post-dispatch snapshot after
    /// every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&RootState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock_listeners();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, snapshot: &RootState) {
        // Clone the list so listeners can (un)subscribe while being called.
        let listeners: Vec<Listener> = self
            .lock_listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

fn log_dispatch(label: &str, state: &RootState) {
    debug!(
        action = %label,
        cart_lines = state.cart().line_count(),
        total_items = state.cart().total_items(),
        total_amount = %state.cart().total_amount(),
        wishlist = state.wishlist().len(),
        "Dispatched action"
    );
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StoreState {
    fn clone(&self) -> Self {
        StoreState {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl fmt::Debug for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreState")
            .field("state", &*self.lock())
            .field("listeners", &self.lock_listeners().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurum_core::{CartAction, CartItem, Money, WishlistAction, WishlistItem};
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    fn item(id: &str, quantity: i64) -> CartItem {
        CartItem::new(id, format!("p{id}"), "Gold Ring", Money::from_minor(100), quantity)
    }

    #[test]
    fn test_dispatch_returns_post_state() {
        let store = StoreState::new();

        let state = store.dispatch(CartAction::AddToCart(item("1", 2)));
        assert_eq!(state.cart().total_items(), 2);
        assert_eq!(state.cart().total_amount(), Money::from_minor(200));

        assert_eq!(store.snapshot(), state);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = StoreState::new();
        let before = store.snapshot();

        store.dispatch(CartAction::AddToCart(item("1", 1)));

        assert!(before.cart().is_empty());
        assert_eq!(store.snapshot().cart().line_count(), 1);
    }

    #[test]
    fn test_slices_are_independent() {
        let store = StoreState::new();
        store.dispatch(CartAction::AddToCart(item("1", 1)));
        store.dispatch(WishlistAction::AddToWishlist(WishlistItem::new(
            "w1",
            "p9",
            "Pearl Earrings",
            Money::from_major(15_000),
            "2024-01-01T00:00:00.000Z",
        )));

        let state = store.dispatch(CartAction::ClearCart);
        assert!(state.cart().is_empty());
        assert_eq!(state.wishlist().len(), 1);
    }

    #[test]
    fn test_subscribers_see_post_dispatch_state() {
        let store = StoreState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &RootState| {
            sink.lock().unwrap().push(state.cart().total_items());
        });

        store.dispatch(CartAction::AddToCart(item("1", 2)));
        store.dispatch(CartAction::UpdateQuantity {
            id: "1".to_string(),
            quantity: 5,
        });

        assert_eq!(*seen.lock().unwrap(), vec![2, 5]);
    }

    #[test]
    fn test_subscriber_can_read_store() {
        let store = StoreState::new();
        let reader = store.clone();
        let lines = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&lines);
        store.subscribe(move |_| {
            sink.store(reader.snapshot().cart().line_count(), Ordering::SeqCst);
        });

        store.dispatch(CartAction::AddToCart(item("1", 1)));
        assert_eq!(lines.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let store = StoreState::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::ClearCart);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(CartAction::ClearCart);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_checked_rejects_without_mutating() {
        let store = StoreState::new();

        let result: Result<RootState, &str> =
            store.dispatch_checked(CartAction::AddToCart(item("1", 1)), |_| Err("nope"));

        assert_eq!(result.unwrap_err(), "nope");
        assert!(store.snapshot().cart().is_empty());
    }

    #[test]
    fn test_concurrent_dispatches_all_apply() {
        let store = StoreState::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        store.dispatch(CartAction::AddToCart(item("1", 1)));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let state = store.snapshot();
        assert_eq!(state.cart().line_count(), 1);
        assert_eq!(state.cart().total_items(), 200);
        assert_eq!(state.cart().total_amount(), Money::from_minor(20_000));
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let store = StoreState::new();
        store.dispatch(CartAction::AddToCart(item("1", 1)));

        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            poisoner.with_state(|_| panic!("reader panicked"));
        })
        .join();

        let state = store.dispatch(CartAction::AddToCart(item("1", 1)));
        assert_eq!(state.cart().total_items(), 2);
    }
}
