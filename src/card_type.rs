//! Card issuer labels

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Issuer recognised by [`crate::classify::classify_card`].
///
/// The set is closed. `DaronCredit` is a local issuer with a fixed 6-digit prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Visa,
    MasterCard,
    Maestro,
    DaronCredit,
}

impl CardType {
    /// All variants, in classification priority order.
    pub const ALL: [CardType; 4] = [
        CardType::Visa,
        CardType::MasterCard,
        CardType::Maestro,
        CardType::DaronCredit,
    ];

    /// Issuer label, as shown by `Display` and accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Visa => "VISA",
            CardType::MasterCard => "MasterCard",
            CardType::Maestro => "Maestro",
            CardType::DaronCredit => "DaronCredit",
        }
    }

    /// Digit lengths at which a number of this type can pass the checksum gate.
    ///
    /// Useful for telling a caller which lengths to expect once the issuer is
    /// known from [`crate::classify_card`], e.g. a 13-digit VISA never validates.
    pub fn checksum_lengths(self) -> &'static [usize] {
        match self {
            CardType::Visa | CardType::MasterCard => &[16],
            CardType::Maestro => &[14, 16],
            CardType::DaronCredit => &[14],
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCardType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(CardType::Visa.to_string(), "VISA");
        assert_eq!(CardType::MasterCard.to_string(), "MasterCard");
        assert_eq!(CardType::Maestro.to_string(), "Maestro");
        assert_eq!(CardType::DaronCredit.to_string(), "DaronCredit");
    }

    #[test]
    fn test_checksum_lengths() {
        let valid = [
            "4111111111111111",
            "5500000000000004",
            "6759649826438453",
            "56123456789018",
            "14819900000008",
        ];
        for number in valid {
            let t = crate::diagnose(number).unwrap();
            assert!(t.checksum_lengths().contains(&number.len()));
        }
        assert_eq!(CardType::Maestro.checksum_lengths(), &[14, 16]);
    }

    #[test]
    fn test_parse_labels() {
        for t in CardType::ALL {
            assert_eq!(t.as_str().parse::<CardType>(), Ok(t));
        }
        assert_eq!(
            "visa".parse::<CardType>(),
            Err(ValidationError::UnknownCardType("visa".into()))
        );
    }
}
