//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, store::Store};

/// The state of the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The accounts, shared by all request handlers.
    ///
    /// Handlers hold the lock for their whole read-modify-write sequence so
    /// that an account's balance and transactions are always updated together.
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    /// Create a new [AppState] that serves the accounts in `store`.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Acquire the store lock.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock was poisoned by a handler
    /// that panicked while holding it.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, Store>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("could not acquire store lock: {error}");
            Error::StoreLockError
        })
    }
}
