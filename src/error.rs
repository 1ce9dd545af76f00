//! Diagnostic error types
//!
//! Only [`crate::validators::diagnose`] and label parsing produce these. The two
//! core entry points keep reporting a bare sentinel or boolean.

use thiserror::Error;

/// Why a card number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Normalized length is neither 14 nor 16.
    #[error("card number must have 14 or 16 digits, got {length}")]
    BadLength { length: usize },

    /// No issuer pattern matched.
    #[error("card number does not match any known issuer")]
    UnknownIssuer,

    /// First non-digit character in the normalized number (0-indexed).
    #[error("invalid character '{}' at position {position}", .character.escape_default())]
    InvalidCharacter { position: usize, character: char },

    /// Luhn sum is not a multiple of 10.
    #[error("checksum mismatch (Luhn sum {sum} is not divisible by 10)")]
    ChecksumMismatch { sum: u64 },

    /// Label passed to `CardType::from_str` is not one of the four issuer labels.
    #[error("unknown card type label: {0}")]
    UnknownCardType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::BadLength { length: 15 }.to_string(),
            "card number must have 14 or 16 digits, got 15"
        );
        assert_eq!(
            ValidationError::InvalidCharacter {
                position: 3,
                character: 'x'
            }
            .to_string(),
            "invalid character 'x' at position 3"
        );
        assert_eq!(
            ValidationError::ChecksumMismatch { sum: 31 }.to_string(),
            "checksum mismatch (Luhn sum 31 is not divisible by 10)"
        );
        assert_eq!(
            ValidationError::UnknownCardType("Amex".into()).to_string(),
            "unknown card type label: Amex"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
