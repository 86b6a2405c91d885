//! In-memory session storage for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{SessionStorage, StorageError};

/// In-memory session storage for testing.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the session store wrote.
///
/// # Example
///
/// ```ignore
/// use murmur::adapters::mock::InMemoryStorage;
/// use murmur::traits::{SessionStorage, TOKEN_KEY};
///
/// let storage = InMemoryStorage::new();
/// storage.set(TOKEN_KEY, "abc")?;
/// assert_eq!(storage.value(TOKEN_KEY), Some("abc".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    write_should_fail: Arc<Mutex<bool>>,
    failing_key: Arc<Mutex<Option<String>>>,
}

impl InMemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with entries.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let storage = Self::new();
        {
            let mut values = storage.values.lock().unwrap();
            for (key, value) in entries {
                values.insert(key.to_string(), value.to_string());
            }
        }
        storage
    }

    /// Configure whether `set` should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    /// Make `set` fail for one key only.
    pub fn set_write_should_fail_for(&self, key: &str) {
        *self.failing_key.lock().unwrap() = Some(key.to_string());
    }

    /// Get a stored value synchronously (for assertions).
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Whether the storage holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.lock().unwrap().is_empty()
    }
}

impl SessionStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let key_fails = self.failing_key.lock().unwrap().as_deref() == Some(key);
        if key_fails || *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "Mock write failure".to_string(),
            });
        }

        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
