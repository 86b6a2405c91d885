//! Unified error type for client operations.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;
use super::validation::PasswordPolicyError;
use crate::traits::{HttpError, StorageError};

/// Unified error type for the murmur client.
///
/// `Display` is the message a user would see: for `Request` that is the
/// backend's message or the operation's fallback, verbatim.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// An authenticated operation was attempted without a token.
    #[error("User is not authenticated")]
    Unauthenticated,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// No response was obtained.
    #[error("{0}")]
    Transport(#[from] HttpError),

    /// A success response whose body could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Client-side validation failed.
    #[error("{0}")]
    Validation(#[from] PasswordPolicyError),

    /// Durable session storage failed.
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// A local file could not be read.
    #[error("Could not read '{}': {message}", .path.display())]
    FileRead { path: PathBuf, message: String },
}

impl ClientError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Unauthenticated => ErrorCategory::Auth,
            ClientError::Request { .. } => ErrorCategory::Request,
            ClientError::Transport(_) => ErrorCategory::Network,
            ClientError::InvalidResponse { .. } => ErrorCategory::Client,
            ClientError::Validation(_) => ErrorCategory::Validation,
            ClientError::Storage(_) | ClientError::FileRead { .. } => ErrorCategory::System,
        }
    }

    /// HTTP status of a request failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if signing in again could resolve this error.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthenticated | ClientError::Request { status: 401, .. }
        )
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Unauthenticated => "E_AUTH_NOT_AUTH",
            ClientError::Request { .. } => "E_NET_HTTP",
            ClientError::Transport(HttpError::ConnectionFailed(_)) => "E_NET_CONN",
            ClientError::Transport(HttpError::Timeout(_)) => "E_NET_TIMEOUT",
            ClientError::Transport(_) => "E_NET_OTHER",
            ClientError::InvalidResponse { .. } => "E_NET_INVALID",
            ClientError::Validation(err) => err.error_code(),
            ClientError::Storage(_) => "E_SYS_STORAGE",
            ClientError::FileRead { .. } => "E_SYS_IO",
        }
    }
}
