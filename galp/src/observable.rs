//! Single-listener observable value cells.
//!
//! An [`Observable`] holds one value and at most one listener. Mutations
//! notify the listener synchronously on the mutating thread; there is no
//! queueing, no buffering of missed values and no thread redirection. A
//! fresh listener is invoked once with the current value right away, so a
//! subscriber is synchronized without waiting for the next mutation.
//!
//! The listener runs while the cell's internal lock is held, so it must not
//! call back into the same cell.
use std::sync::{Mutex, PoisonError};

type Listener<T> = Box<dyn Fn(&T) + Send + 'static>;

pub struct Observable<T> {
    value: Mutex<T>,
    listener: Mutex<Option<Listener<T>>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
            listener: Mutex::new(None),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the value and notify the bound listener, if any, exactly
    /// once with the new value. Without a listener this is just a store.
    pub fn set(&self, value: T) {
        let mut current = self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *current = value;
        // lock order is always value then listener
        let listener = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(callback) = listener.as_ref() {
            callback(&current);
        }
    }

    /// Register `listener`, replacing a previously bound one, and invoke it
    /// immediately with the current value.
    pub fn bind(&self, listener: impl Fn(&T) + Send + 'static) {
        let current = self
            .value
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut slot = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Box::new(listener));
        if let Some(callback) = slot.as_ref() {
            callback(&current);
        }
    }

    /// Drop the listener; later mutations notify nobody.
    pub fn unbind(&self) {
        let mut slot = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .finish()
    }
}
