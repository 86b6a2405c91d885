//! Register-time password policy.

use crate::error::PasswordPolicyError;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Check a password against its confirmation and the policy.
///
/// Checks run in a fixed order and the first failure is returned:
/// confirmation match, an ASCII capital letter, an ASCII digit, length.
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), PasswordPolicyError> {
    if password != confirmation {
        return Err(PasswordPolicyError::Mismatch);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert_eq!(validate_password("Abc123", "Abc123"), Ok(()));
    }

    #[test]
    fn test_mismatch_checked_first() {
        // would also fail every other rule
        assert_eq!(
            validate_password("ab", "cd"),
            Err(PasswordPolicyError::Mismatch)
        );
    }

    #[test]
    fn test_missing_uppercase() {
        assert_eq!(
            validate_password("abc123", "abc123"),
            Err(PasswordPolicyError::MissingUppercase)
        );
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(
            validate_password("Abcdef", "Abcdef"),
            Err(PasswordPolicyError::MissingDigit)
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_password("Ab1", "Ab1"),
            Err(PasswordPolicyError::TooShort { min: 6 })
        );
    }

    #[test]
    fn test_non_ascii_capital_does_not_count() {
        assert_eq!(
            validate_password("Ébc123", "Ébc123"),
            Err(PasswordPolicyError::MissingUppercase)
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // each 𝒜 is a surrogate pair
        assert_eq!(validate_password("A1𝒜𝒜", "A1𝒜𝒜"), Ok(()));
        assert_eq!(
            validate_password("A1é𝒜", "A1é𝒜"),
            Err(PasswordPolicyError::TooShort { min: 6 })
        );
    }

    #[test]
    fn test_exact_minimum_length() {
        assert!(validate_password("Abcde1", "Abcde1").is_ok());
        assert!(validate_password("Abcd1", "Abcd1").is_err());
    }
}
