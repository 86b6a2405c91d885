//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, JSON POST, multipart POST)
//! - [`SessionStorage`] - Durable key/value storage for the session

pub mod http;
pub mod storage;

pub use http::{FilePart, Headers, HttpClient, HttpError, Response};
pub use storage::{SessionStorage, StorageError, TOKEN_KEY, USER_KEY};
