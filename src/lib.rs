//! Payment card number validation
//!
//! Classifies a card number by issuer pattern and verifies its Luhn checksum.
//! Spaces and hyphens in the input are ignored. Both entry points are total:
//! bad input yields `None` or `false`, never an error. [`diagnose`] reports
//! why a number was rejected.
//!
//! Python bindings are built with the `python` feature.

mod batch;
mod card_type;
mod classify;
mod error;
mod normalize;
#[cfg(feature = "python")]
mod python;
mod validators;

pub use batch::{classify_many, validate_many};
pub use card_type::CardType;
pub use classify::{classify_card, patterns};
pub use error::ValidationError;
pub use normalize::strip_separators;
pub use validators::{diagnose, luhn, validate_checksum, CHECKSUM_LENGTHS};
