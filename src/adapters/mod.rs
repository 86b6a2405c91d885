//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSessionStorage`] - File-based session storage under `~/.murmur`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for both adapters:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses with request recording
//! - [`mock::InMemoryStorage`] - In-memory key/value storage

pub mod file_storage;
pub mod mock;
pub mod reqwest_http;

pub use file_storage::FileSessionStorage;
pub use mock::{InMemoryStorage, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
