//! File-based session storage adapter.
//!
//! Each key is stored as its own file inside a storage directory
//! (`~/.murmur/` by default), so `token` holds the raw bearer token and
//! `user` holds the serialized identity.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::{SessionStorage, StorageError};

/// The default storage directory name under the home directory.
pub const STORAGE_DIR: &str = ".murmur";

/// File-based session storage.
///
/// # Example
///
/// ```ignore
/// use murmur::adapters::FileSessionStorage;
/// use murmur::traits::{SessionStorage, TOKEN_KEY};
///
/// let storage = FileSessionStorage::new()?;
/// storage.set(TOKEN_KEY, "abc")?;
/// assert_eq!(storage.get(TOKEN_KEY)?, Some("abc".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    /// Create storage rooted at `~/.murmur`.
    ///
    /// # Returns
    /// The storage, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StorageError> {
        let home = dirs::home_dir().ok_or_else(|| {
            StorageError::Unavailable("Failed to determine home directory".to_string())
        })?;
        Ok(Self::with_dir(home.join(STORAGE_DIR)))
    }

    /// Create storage rooted at an explicit directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        };

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(write_failed)?;
        }

        let file = File::create(self.path_for(key)).map_err(write_failed)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(value.as_bytes()).map_err(write_failed)?;
        writer.flush().map_err(write_failed)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::RemoveFailed {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{TOKEN_KEY, USER_KEY};
    use tempfile::TempDir;

    fn create_test_storage(temp_dir: &TempDir) -> FileSessionStorage {
        FileSessionStorage::with_dir(temp_dir.path().join(STORAGE_DIR))
    }

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);
        assert!(!storage.dir().exists());

        storage.set(TOKEN_KEY, "abc").unwrap();

        assert!(storage.dir().exists());
        assert!(storage.path_for(TOKEN_KEY).exists());
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);

        storage.set(TOKEN_KEY, "token-1").unwrap();
        storage.set(USER_KEY, r#"{"id":1,"username":"ana"}"#).unwrap();

        assert_eq!(storage.get(TOKEN_KEY).unwrap(), Some("token-1".to_string()));
        assert_eq!(
            storage.get(USER_KEY).unwrap(),
            Some(r#"{"id":1,"username":"ana"}"#.to_string())
        );
    }

    #[test]
    fn test_set_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);

        storage.set(TOKEN_KEY, "a-much-longer-first-token").unwrap();
        storage.set(TOKEN_KEY, "short").unwrap();

        assert_eq!(storage.get(TOKEN_KEY).unwrap(), Some("short".to_string()));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);

        storage.set(TOKEN_KEY, "abc").unwrap();
        storage.remove(TOKEN_KEY).unwrap();

        assert!(!storage.path_for(TOKEN_KEY).exists());
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);
        assert!(storage.remove(USER_KEY).is_ok());
    }
}
