//! Durable session storage trait abstraction.
//!
//! The session store persists exactly two string values (the bearer token
//! and the serialized identity) under fixed keys. This trait hides where
//! they live so tests can swap in an in-memory map.

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-serialized identity.
pub const USER_KEY: &str = "user";

/// Storage operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Failed to read a value
    ReadFailed { key: String, message: String },
    /// Failed to write a value
    WriteFailed { key: String, message: String },
    /// Failed to remove a value
    RemoveFailed { key: String, message: String },
    /// Storage location could not be determined
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadFailed { key, message } => {
                write!(f, "Failed to read '{}': {}", key, message)
            }
            StorageError::WriteFailed { key, message } => {
                write!(f, "Failed to write '{}': {}", key, message)
            }
            StorageError::RemoveFailed { key, message } => {
                write!(f, "Failed to remove '{}': {}", key, message)
            }
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Synchronous string key/value storage that survives process restarts.
///
/// # Example
///
/// ```ignore
/// use murmur::traits::{SessionStorage, TOKEN_KEY};
///
/// fn remember<S: SessionStorage>(storage: &S, token: &str) -> Result<(), StorageError> {
///     storage.set(TOKEN_KEY, token)
/// }
/// ```
pub trait SessionStorage: Send + Sync {
    /// Read a value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key is present
    /// - `Ok(None)` if nothing is stored under the key
    /// - `Err(error)` if the read itself failed
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::ReadFailed {
                key: "token".to_string(),
                message: "denied".to_string()
            }
            .to_string(),
            "Failed to read 'token': denied"
        );
        assert_eq!(
            StorageError::WriteFailed {
                key: "user".to_string(),
                message: "disk full".to_string()
            }
            .to_string(),
            "Failed to write 'user': disk full"
        );
        assert_eq!(
            StorageError::Unavailable("no home".to_string()).to_string(),
            "Storage unavailable: no home"
        );
    }

    #[test]
    fn test_storage_error_implements_error_trait() {
        let err = StorageError::Unavailable("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
