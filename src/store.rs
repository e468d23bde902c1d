//! A small observable key/value store for UI state.
//!
//! Every [`Store::set`] applies the write and then synchronously calls each
//! subscriber with the full state. There is no batching: two writes produce
//! two notification rounds.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use serde_json::Value;

pub type State = BTreeMap<String, Value>;
pub type Listener = Arc<dyn Fn(&State) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: Mutex<Arc<State>>,
    listeners: Mutex<Vec<Listener>>,
}

/// Cheap to clone; clones share the same state and subscribers.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn same_listener(a: &Listener, b: &Listener) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl Store {
    pub fn new<I, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let state = initial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<State>();
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(Arc::new(state)),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers `listener`. Subscribing the same `Arc` twice keeps a single entry.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        {
            let mut listeners = lock(&self.inner.listeners);
            if !listeners.iter().any(|l| same_listener(l, &listener)) {
                listeners.push(Arc::clone(&listener));
            }
        }
        Subscription {
            store: Arc::downgrade(&self.inner),
            listener,
        }
    }

    /// Writes `key` and notifies every subscriber before returning.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        {
            let mut state = lock(&self.inner.state);
            Arc::make_mut(&mut state).insert(key.into(), value.into());
        }
        self.notify();
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        lock(&self.inner.state).get(key).cloned()
    }

    pub fn snapshot(&self) -> Arc<State> {
        Arc::clone(&lock(&self.inner.state))
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }

    fn notify(&self) {
        // listeners may re-enter the store, so no lock is held while they run
        let listeners = lock(&self.inner.listeners).clone();
        for listener in listeners.iter() {
            // re-read per listener: an earlier listener may have written again
            let state = self.snapshot();
            listener(&state);
        }
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it leaves the listener registered; call [`Subscription::unsubscribe`]
/// when the subscriber goes away.
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    store: Weak<Inner>,
    listener: Listener,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            lock(&inner.listeners).retain(|l| !same_listener(l, &self.listener));
        }
    }
}
