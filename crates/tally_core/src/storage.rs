//! Key/value string storage capability.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::StoreError;

/// A key/value store of strings that survives restarts.
///
/// The state machine never touches storage directly; the controller applies
/// [`Effect`](crate::Effect)s to whichever store it was given.
pub trait Store {
    /// Returns the value under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!(bytes = value.len(), "Saving entry");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
