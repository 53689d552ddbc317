//! Observable cart container.
//!
//! [`CartStore`] owns the [`Cart`] for one session scope and is the only
//! mutation path: display components never hold a mutable line, they receive
//! read snapshots through [`CartObserver::cart_changed`] or [`CartStore::snapshot`].
//!
//! The store is an explicit value constructed once per session scope and
//! handed to its consumers - never ambient global state. Mutation and
//! notification are synchronous: by the time an operation returns, every
//! live subscriber has seen the new snapshot.

use std::sync::{Arc, RwLock, Weak};

use rust_decimal::Decimal;

use super::{Cart, CartLine};

/// A read-only consumer of cart changes (count badge, cart screen).
///
/// Observers are held weakly; a dropped subscriber is pruned on the next
/// notification rather than kept alive by the store.
pub trait CartObserver: Send + Sync {
    /// Called synchronously after every mutation with a consistent snapshot.
    fn cart_changed(&self, cart: &Cart);
}

/// Session-scoped store for the active [`Cart`].
///
/// Cheap to clone - clones share the same underlying cart and subscriber
/// list, which is what lets the producer side (listing screens) and the
/// consumer side (cart screen, badge) talk about the same state.
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

#[derive(Default)]
struct CartStoreInner {
    cart: RwLock<Cart>,
    observers: RwLock<Vec<Weak<dyn CartObserver>>>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store rehydrated from a previously persisted cart.
    #[must_use]
    pub fn with_cart(cart: Cart) -> Self {
        Self {
            inner: Arc::new(CartStoreInner {
                cart: RwLock::new(cart),
                observers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Subscribe a display component to mutation notifications.
    ///
    /// The store keeps only a weak reference; the subscriber controls its own
    /// lifetime.
    pub fn subscribe(&self, observer: &Arc<dyn CartObserver>) {
        if let Ok(mut observers) = self.inner.observers.write() {
            observers.push(Arc::downgrade(observer));
        }
    }

    /// Add a line, aggregating by product id (see [`Cart::add_item`]).
    pub fn add_item(&self, line: CartLine) {
        self.mutate(|cart| cart.add_item(line));
    }

    /// Remove the line with the given id; no-op if absent.
    pub fn remove_item(&self, id: &str) {
        self.mutate(|cart| cart.remove_item(id));
    }

    /// Set a line's quantity; zero removes the line (see
    /// [`Cart::update_quantity`]).
    pub fn update_quantity(&self, id: &str, quantity: u32) {
        self.mutate(|cart| cart.update_quantity(id, quantity));
    }

    /// Empty the cart. Used after a successful order hand-off.
    pub fn clear(&self) {
        self.mutate(Cart::clear);
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.read(Cart::total_price)
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.read(Cart::item_count)
    }

    /// A read snapshot of the current cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.read(Cart::clone)
    }

    fn read<T>(&self, f: impl FnOnce(&Cart) -> T) -> T {
        match self.inner.cart.read() {
            Ok(cart) => f(&cart),
            // A poisoned lock still holds a structurally valid cart; cart
            // operations never panic mid-update, so the value is usable.
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut Cart)) {
        let snapshot = {
            let mut cart = match self.inner.cart.write() {
                Ok(cart) => cart,
                Err(poisoned) => poisoned.into_inner(),
            };
            f(&mut cart);
            cart.clone()
        };
        self.notify(&snapshot);
    }

    /// Notify live subscribers, pruning any that have been dropped.
    ///
    /// Subscribers are upgraded under the lock but invoked outside it, so a
    /// subscriber may call back into the store without deadlocking.
    fn notify(&self, snapshot: &Cart) {
        let live: Vec<Arc<dyn CartObserver>> = {
            let Ok(mut observers) = self.inner.observers.write() else {
                return;
            };
            observers.retain(|weak| weak.strong_count() > 0);
            observers.iter().filter_map(Weak::upgrade).collect()
        };
        for observer in live {
            observer.cart_changed(snapshot);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn line(id: &str, price: i64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_owned(),
            name: format!("product {id}"),
            price: Decimal::from(price),
            quantity,
            image: None,
            restaurant_id: None,
            restaurant_name: None,
        }
    }

    /// Records every notification it receives, like the header badge would.
    #[derive(Default)]
    struct RecordingObserver {
        counts: Mutex<Vec<u32>>,
    }

    impl CartObserver for RecordingObserver {
        fn cart_changed(&self, cart: &Cart) {
            self.counts.lock().unwrap().push(cart.item_count());
        }
    }

    #[test]
    fn test_mutations_notify_subscribers_in_order() {
        let store = CartStore::new();
        let recorder = Arc::new(RecordingObserver::default());
        let as_observer: Arc<dyn CartObserver> = recorder.clone();
        store.subscribe(&as_observer);

        store.add_item(line("b1", 90, 1));
        store.add_item(line("b1", 90, 1));
        store.update_quantity("b1", 5);
        store.remove_item("b1");

        assert_eq!(*recorder.counts.lock().unwrap(), vec![1, 2, 5, 0]);
    }

    #[test]
    fn test_dropped_observer_is_pruned() {
        let store = CartStore::new();
        let recorder = Arc::new(RecordingObserver::default());
        let as_observer: Arc<dyn CartObserver> = recorder.clone();
        store.subscribe(&as_observer);

        drop(as_observer);
        drop(recorder);

        // Must not panic or deliver to the dead subscriber.
        store.add_item(line("b1", 90, 1));
        assert_eq!(store.item_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = CartStore::new();
        let producer = store.clone();

        producer.add_item(line("b1", 90, 2));

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total_price(), Decimal::from(180));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = CartStore::new();
        store.add_item(line("b1", 90, 1));

        let snapshot = store.snapshot();
        store.clear();

        // The consumer's snapshot is unaffected by later mutations.
        assert_eq!(snapshot.item_count(), 1);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_rehydrated_store_keeps_lines() {
        let mut cart = Cart::new();
        cart.add_item(line("b1", 90, 1));
        cart.add_item(line("f1", 35, 1));

        let store = CartStore::with_cart(cart);
        store.add_item(line("b1", 90, 1));

        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(store.total_price(), Decimal::from(215));
    }
}
