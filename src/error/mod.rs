//! Error handling for the murmur client.
//!
//! | Category | Raised | Surfaced by |
//! |----------|--------|-------------|
//! | Auth | before any request, when no token is held | logged by feed/profile views |
//! | Request | on a non-2xx response | inline in auth views, logged elsewhere |
//! | Validation | before any request, on register | inline in the register view |
//! | Network | when no response was obtained | same as Request |
//! | Client | when a 2xx body does not decode | same as Request |
//! | System | on storage or file failures | caller |
//!
//! Nothing is retried automatically and nothing is fatal to the process.

mod category;
mod client_error;
mod result;
mod validation;

pub use category::ErrorCategory;
pub use client_error::ClientError;
pub use result::ClientResult;
pub use validation::PasswordPolicyError;

pub use crate::traits::{HttpError, StorageError};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_local_errors_are_local() {
        let local: Vec<ClientError> = vec![
            ClientError::Unauthenticated,
            PasswordPolicyError::TooShort { min: 6 }.into(),
            StorageError::Unavailable("x".to_string()).into(),
        ];
        for err in local {
            assert!(err.category().is_local(), "Expected {:?} to be local", err);
        }

        let remote: Vec<ClientError> = vec![
            ClientError::Request {
                status: 500,
                message: "boom".to_string(),
            },
            HttpError::ConnectionFailed("refused".to_string()).into(),
        ];
        for err in remote {
            assert!(!err.category().is_local(), "Expected {:?} to be remote", err);
        }
    }

    #[test]
    fn test_all_errors_have_codes() {
        let errors: Vec<ClientError> = vec![
            ClientError::Unauthenticated,
            ClientError::InvalidResponse {
                message: "eof".to_string(),
            },
            PasswordPolicyError::MissingUppercase.into(),
        ];
        for err in errors {
            assert!(err.error_code().starts_with("E_"));
        }
    }
}
