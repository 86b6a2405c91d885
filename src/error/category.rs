//! Error category classification.
//!
//! Categories decide where an error ends up: the auth views show request and
//! validation failures inline, the feed and profile views only log them.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An authenticated operation was attempted without a session token.
    /// Raised before any network call.
    Auth,

    /// The backend answered with a non-success status.
    Request,

    /// Client-side input checks failed. Raised before any network call.
    Validation,

    /// No response was obtained (connection, DNS, timeout).
    Network,

    /// The backend answered with something that does not decode.
    Client,

    /// Local durable storage or file system failure.
    System,
}

impl ErrorCategory {
    /// Whether errors of this category are raised before any request is sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Auth | ErrorCategory::Validation | ErrorCategory::System
        )
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::Request => "request",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Network => "network",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
