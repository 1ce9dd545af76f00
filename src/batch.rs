//! Batch classification and validation
//!
//! Parallel over the input slice with rayon. Output order matches input order.

use rayon::prelude::*;

use crate::card_type::CardType;
use crate::classify::classify_card;
use crate::validators::validate_checksum;

/// Classify every number in `numbers`.
pub fn classify_many<S: AsRef<str> + Sync>(numbers: &[S]) -> Vec<Option<CardType>> {
    tracing::debug!(count = numbers.len(), "classifying batch");
    numbers.par_iter().map(|n| classify_card(n.as_ref())).collect()
}

/// Validate the checksum of every number in `numbers`.
pub fn validate_many<S: AsRef<str> + Sync>(numbers: &[S]) -> Vec<bool> {
    tracing::debug!(count = numbers.len(), "validating batch");
    numbers
        .par_iter()
        .map(|n| validate_checksum(n.as_ref()))
        .collect()
}
