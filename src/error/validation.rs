//! Client-side validation errors.

use thiserror::Error;

/// Password policy violations checked before registering.
///
/// Variants are listed in the order the checks run; the first failing
/// check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Passwords do not match")]
    Mismatch,

    #[error("Password must contain at least one capital letter")]
    MissingUppercase,

    #[error("Password must contain at least one number")]
    MissingDigit,

    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

impl PasswordPolicyError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PasswordPolicyError::Mismatch => "E_VAL_MISMATCH",
            PasswordPolicyError::MissingUppercase => "E_VAL_UPPERCASE",
            PasswordPolicyError::MissingDigit => "E_VAL_DIGIT",
            PasswordPolicyError::TooShort { .. } => "E_VAL_LENGTH",
        }
    }
}
