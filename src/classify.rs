//! Issuer classification by numeric pattern
//!
//! Patterns are tried in a fixed order and the first match wins. Digit classes
//! are spelled `[0-9]` because `\d` in the regex crate also matches non-ASCII
//! decimal digits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::card_type::CardType;
use crate::normalize::strip_separators;

const PATTERNS: [(CardType, &str); 4] = [
    // 4 followed by 12 or 15 digits
    (CardType::Visa, r"^4[0-9]{12}(?:[0-9]{3})?$"),
    // 51-55, 16 digits
    (CardType::MasterCard, r"^5[1-5][0-9]{14}$"),
    // 50xx, 56xx-58xx, 6304, 6390, 67xx; 12 to 19 digits
    (
        CardType::Maestro,
        r"^(?:5[0678][0-9]{2}|6304|6390|67[0-9]{2})[0-9]{8,15}$",
    ),
    // 148199, 14 digits
    (CardType::DaronCredit, r"^148199[0-9]{8}$"),
];

static COMPILED: Lazy<Vec<(CardType, Regex)>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .map(|&(card_type, pattern)| {
            (
                card_type,
                Regex::new(pattern).expect("issuer patterns are valid regexes"),
            )
        })
        .collect()
});

/// The issuer pattern table, in priority order.
pub fn patterns() -> impl Iterator<Item = (CardType, &'static str)> {
    PATTERNS.iter().copied()
}

/// Classify a card number by issuer.
///
/// Spaces and hyphens are ignored. Returns `None` when no pattern matches.
/// Patterns are anchored at end of input, so a trailing newline is not
/// tolerated: `"4111111111111111\n"` does not classify.
pub fn classify_card(number: &str) -> Option<CardType> {
    let digits = strip_separators(number);
    classify_normalized(&digits)
}

pub(crate) fn classify_normalized(digits: &str) -> Option<CardType> {
    COMPILED
        .iter()
        .find(|(_, re)| re.is_match(digits))
        .map(|&(card_type, _)| card_type)
}
