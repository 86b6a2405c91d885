//! Integration tests for session persistence across process restarts.
//!
//! A restart is simulated by building a fresh `SessionStore` over the same
//! storage directory.

use std::fs;

use murmur::adapters::FileSessionStorage;
use murmur::models::Identity;
use murmur::session::SessionStore;
use murmur::traits::{SessionStorage, TOKEN_KEY, USER_KEY};
use tempfile::TempDir;

fn storage(dir: &TempDir) -> FileSessionStorage {
    FileSessionStorage::with_dir(dir.path().join(".murmur"))
}

fn ana() -> Identity {
    let mut user = Identity::new(1, "ana");
    user.email = Some("ana@example.com".to_string());
    user
}

#[test]
fn test_login_survives_restart() {
    let dir = TempDir::new().unwrap();
    SessionStore::restore(storage(&dir)).login("tok", ana()).unwrap();

    let restored = SessionStore::restore(storage(&dir));

    assert!(restored.is_authenticated());
    assert_eq!(restored.token().as_deref(), Some("tok"));
    assert_eq!(restored.user(), Some(ana()));
}

#[test]
fn test_token_is_stored_raw() {
    let dir = TempDir::new().unwrap();
    let files = storage(&dir);
    SessionStore::new(files.clone()).login("raw-token", ana()).unwrap();

    assert_eq!(fs::read_to_string(files.path_for(TOKEN_KEY)).unwrap(), "raw-token");
    let user: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(files.path_for(USER_KEY)).unwrap()).unwrap();
    assert_eq!(user["username"], "ana");
}

#[test]
fn test_logout_survives_restart() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::restore(storage(&dir));
    store.login("tok", ana()).unwrap();
    store.logout().unwrap();

    let restored = SessionStore::restore(storage(&dir));

    assert!(!restored.is_authenticated());
    assert!(restored.user().is_none());
}

#[test]
fn test_token_without_identity_is_discarded() {
    let dir = TempDir::new().unwrap();
    let files = storage(&dir);
    files.set(TOKEN_KEY, "orphan").unwrap();

    let restored = SessionStore::restore(files.clone());

    assert!(!restored.is_authenticated());
    assert_eq!(files.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn test_identity_without_token_is_discarded() {
    let dir = TempDir::new().unwrap();
    let files = storage(&dir);
    files.set(USER_KEY, r#"{"id":1,"username":"ana"}"#).unwrap();

    let restored = SessionStore::restore(files.clone());

    assert!(restored.user().is_none());
    assert_eq!(files.get(USER_KEY).unwrap(), None);
}

#[test]
fn test_corrupt_identity_is_discarded() {
    let dir = TempDir::new().unwrap();
    let files = storage(&dir);
    files.set(TOKEN_KEY, "tok").unwrap();
    files.set(USER_KEY, "{not json").unwrap();

    let restored = SessionStore::restore(files.clone());

    assert!(!restored.is_authenticated());
    assert_eq!(files.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(files.get(USER_KEY).unwrap(), None);
}

#[test]
fn test_identity_update_survives_restart() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::restore(storage(&dir));
    store.login("tok", ana()).unwrap();

    let mut updated = ana();
    updated.profile_pic = Some("/uploads/new.png".to_string());
    store.update_identity(updated.clone()).unwrap();

    let restored = SessionStore::restore(storage(&dir));
    assert_eq!(restored.user(), Some(updated));
    assert_eq!(restored.token().as_deref(), Some("tok"));
}
