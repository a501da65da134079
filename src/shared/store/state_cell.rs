use std::sync::{Arc, PoisonError, RwLock};

/// A single mutable cell holding an immutable state snapshot.
///
/// Every action builds a new state from the current one and swaps it in
/// whole, so readers holding an older `Arc` keep a consistent view.
pub struct StateCell<S> {
    name: &'static str,
    state: RwLock<Arc<S>>,
}

impl<S> StateCell<S> {
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            name,
            state: RwLock::new(Arc::new(initial)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> Arc<S> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Runs `action` against the current state. Returning `None` leaves the
    /// state untouched. Returns whether a new state was stored.
    pub fn update(&self, action: &'static str, f: impl FnOnce(&S) -> Option<S>) -> bool {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match f(&guard) {
            Some(next) => {
                *guard = Arc::new(next);
                tracing::trace!(store = self.name, action, "state updated");
                true
            }
            None => {
                tracing::trace!(store = self.name, action, "state unchanged");
                false
            }
        }
    }

    pub fn replace(&self, action: &'static str, next: S) {
        self.update(action, |_| Some(next));
    }
}
