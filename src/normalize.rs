//! Input normalization
//!
//! Card numbers are commonly written in groups separated by spaces or hyphens.
//! Both are dropped before any length or pattern check; every other character
//! is kept so later stages can reject it.

use std::borrow::Cow;

/// Remove every space and hyphen, preserving the order of the rest.
///
/// Returns the input unchanged (borrowed) when it holds no separator.
pub fn strip_separators(number: &str) -> Cow<'_, str> {
    if memchr::memchr2(b' ', b'-', number.as_bytes()).is_none() {
        return Cow::Borrowed(number);
    }

    Cow::Owned(number.chars().filter(|&c| c != ' ' && c != '-').collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_spaces_and_hyphens() {
        assert_eq!(strip_separators("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_separators("4111-1111-1111-1111"), "4111111111111111");
        assert_eq!(strip_separators(" -41 11- "), "4111");
    }

    #[test]
    fn test_keeps_other_characters() {
        assert_eq!(strip_separators("4111_1111.x"), "4111_1111.x");
        assert_eq!(strip_separators("41\t11"), "41\t11");
    }

    #[test]
    fn test_borrowed_without_separators() {
        assert!(matches!(strip_separators("4111111111111111"), Cow::Borrowed(_)));
        assert!(matches!(strip_separators("4111 1111"), Cow::Owned(_)));
        assert_eq!(strip_separators(""), "");
    }

    proptest! {
        #[test]
        fn prop_idempotent(s in ".*") {
            let once = strip_separators(&s).into_owned();
            let twice = strip_separators(&once);
            prop_assert_eq!(twice.as_ref(), once.as_str());
        }

        #[test]
        fn prop_no_separators_left(s in "[0-9 \\-a-z]*") {
            let out = strip_separators(&s);
            prop_assert!(!out.contains(' ') && !out.contains('-'));
        }
    }
}
