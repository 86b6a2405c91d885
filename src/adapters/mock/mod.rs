//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses and request recording
//! - [`InMemoryStorage`] - In-memory session storage

pub mod http;
pub mod storage;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemoryStorage;
