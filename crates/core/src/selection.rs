//! Shared multi-select store for try-on candidates.
//!
//! The storefront grid and the try-on panel are mounted independently, so
//! both hold a reference to one [`SelectionStore`] and react to each
//! other's mutations through subscriber callbacks. Observers are invoked
//! synchronously, inside the mutating call, with the post-mutation
//! contents.
//!
//! Ordering is insertion order only: removing and re-adding a product
//! moves it to the end. No id ever appears twice.

use std::sync::Mutex;

use crate::catalog::Product;

/// Callback invoked with the full selection after every mutation.
pub type SelectionObserver = Box<dyn Fn(&[Product]) + Send + Sync>;

/// Process-wide ordered set of currently chosen products, keyed by id.
///
/// All operations are total: toggling, removing, or clearing never fails.
/// Designed to be shared via `Arc<SelectionStore>`.
#[derive(Default)]
pub struct SelectionStore {
    items: Mutex<Vec<Product>>,
    observers: Mutex<Vec<SelectionObserver>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It fires on every subsequent mutation.
    pub fn subscribe(&self, observer: SelectionObserver) {
        self.observers
            .lock()
            .expect("selection observers poisoned")
            .push(observer);
    }

    /// Add the product if absent, remove it if present.
    pub fn toggle(&self, product: Product) {
        {
            let mut items = self.items.lock().expect("selection poisoned");
            if let Some(pos) = items.iter().position(|p| p.id == product.id) {
                items.remove(pos);
            } else {
                items.push(product);
            }
        }
        self.notify();
    }

    /// Remove by id. A no-op when the id is not selected.
    pub fn remove(&self, id: &str) {
        {
            let mut items = self.items.lock().expect("selection poisoned");
            items.retain(|p| p.id != id);
        }
        self.notify();
    }

    /// Drop the entire selection.
    pub fn clear(&self) {
        self.items.lock().expect("selection poisoned").clear();
        self.notify();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.items
            .lock()
            .expect("selection poisoned")
            .iter()
            .any(|p| p.id == id)
    }

    /// Snapshot of the current selection in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.items.lock().expect("selection poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().expect("selection poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify(&self) {
        let snapshot = self.list();
        for observer in self
            .observers
            .lock()
            .expect("selection observers poisoned")
            .iter()
        {
            observer(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::catalog::find_product;

    fn product(id: &str) -> Product {
        find_product(id).unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let store = SelectionStore::new();
        store.toggle(product("1"));
        assert!(store.is_selected("1"));
        store.toggle(product("1"));
        assert!(!store.is_selected("1"));
        assert!(store.is_empty());
    }

    #[test]
    fn double_toggle_restores_contents_but_moves_to_end() {
        let store = SelectionStore::new();
        store.toggle(product("1"));
        store.toggle(product("2"));
        store.toggle(product("3"));

        // Remove and re-add "1": same contents, but "1" now last.
        store.toggle(product("1"));
        store.toggle(product("1"));

        let ids: Vec<_> = store.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn no_id_appears_twice() {
        let store = SelectionStore::new();
        store.toggle(product("5"));
        store.toggle(product("5"));
        store.toggle(product("5"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let store = SelectionStore::new();
        store.toggle(product("1"));
        store.toggle(product("2"));
        store.remove("1");
        assert_eq!(store.len(), 1);
        store.remove("not-selected");
        assert_eq!(store.len(), 1);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn observers_fire_synchronously_on_every_mutation() {
        let store = SelectionStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        store.subscribe(Box::new(move |items| {
            seen.fetch_add(1, Ordering::SeqCst);
            // Observer sees the post-mutation snapshot.
            assert!(items.len() <= 2);
        }));

        store.toggle(product("1"));
        store.toggle(product("2"));
        store.remove("1");
        store.clear();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
