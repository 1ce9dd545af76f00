//! Checksum validation
//!
//! The Luhn pass walks digits left to right with doubling on the first digit.
//! Only 14- and 16-digit numbers reach it, and for even lengths this doubles
//! the same positions as the usual right-to-left formulation.

use crate::card_type::CardType;
use crate::classify::classify_normalized;
use crate::error::ValidationError;
use crate::normalize::strip_separators;

/// Normalized lengths accepted by the checksum gate.
pub const CHECKSUM_LENGTHS: [usize; 2] = [14, 16];

/// Left-to-right Luhn over an already normalized digit string.
///
/// Returns `false` for an empty string or on any non-digit character.
pub fn luhn(digits: &str) -> bool {
    !digits.is_empty() && matches!(luhn_sum(digits), Ok(sum) if sum % 10 == 0)
}

fn luhn_sum(digits: &str) -> Result<u64, ValidationError> {
    let mut sum: u64 = 0;
    let mut double = true;

    for (position, c) in digits.chars().enumerate() {
        let mut d = c.to_digit(10).ok_or(ValidationError::InvalidCharacter {
            position,
            character: c,
        })?;

        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += u64::from(d);
        double = !double;
    }

    Ok(sum)
}

/// Validate a card number's checksum.
///
/// The number must be 14 or 16 digits after removing spaces and hyphens, match a
/// known issuer, and pass Luhn. Every failure yields `false`; use [`diagnose`]
/// to find out which check failed.
pub fn validate_checksum(number: &str) -> bool {
    diagnose(number).is_ok()
}

/// Run the same checks as [`validate_checksum`], reporting the first failure.
///
/// On success returns the issuer, which always equals
/// [`crate::classify::classify_card`] for the same input.
pub fn diagnose(number: &str) -> Result<CardType, ValidationError> {
    let digits = strip_separators(number);

    // Length in characters, not bytes
    let length = digits.chars().count();
    if !CHECKSUM_LENGTHS.contains(&length) {
        tracing::trace!(length, "rejected: bad length");
        return Err(ValidationError::BadLength { length });
    }

    let Some(card_type) = classify_normalized(&digits) else {
        tracing::trace!("rejected: unknown issuer");
        return Err(ValidationError::UnknownIssuer);
    };

    let sum = luhn_sum(&digits).inspect_err(|e| tracing::trace!(error = %e, "rejected"))?;
    if sum % 10 != 0 {
        tracing::trace!(sum, %card_type, "rejected: checksum mismatch");
        return Err(ValidationError::ChecksumMismatch { sum });
    }

    Ok(card_type)
}
