//! Reference designator parsing and natural ordering.
//!
//! A designator like `R10` splits into a type prefix (`R`) and a numeric
//! suffix (`10`). Designators that do not round-trip through this split
//! (no numeric tail, or a zero-padded tail like `R01`) are treated as
//! opaque strings by the sorter and the range compactor.

use std::cmp::Ordering;

/// A reference designator split into its type prefix and numeric suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefDes<'a> {
    /// Leading part of the designator, e.g. `R` or `SW`
    pub prefix: &'a str,
    /// Trailing number, e.g. `10`
    pub number: u32,
}

impl<'a> RefDes<'a> {
    /// Split a designator into prefix and numeric suffix.
    ///
    /// Returns `None` when the designator has no numeric tail, the tail
    /// does not fit in a `u32`, or re-joining prefix and number would not
    /// reproduce the input (zero-padded numbers). The latter guarantee is
    /// what keeps range compaction losslessly invertible.
    pub fn parse(reference: &'a str) -> Option<Self> {
        let tail_start = reference
            .rfind(|c: char| !c.is_ascii_digit())
            .map_or(0, |i| i + 1);
        let (prefix, digits) = reference.split_at(tail_start);
        if prefix.is_empty() || digits.is_empty() {
            return None;
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return None;
        }
        let number = digits.parse().ok()?;
        Some(Self { prefix, number })
    }
}

/// Leading alphabetic class prefix of a designator (`SW12` → `SW`).
///
/// Unlike [`RefDes::parse`] this never fails; a designator with no
/// alphabetic prefix yields the empty string.
pub fn class_prefix(reference: &str) -> &str {
    let end = reference
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(reference.len());
    &reference[..end]
}

/// Natural comparison of two designators (`R9` before `R10`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let r = RefDes::parse("R10").unwrap();
        assert_eq!(r.prefix, "R");
        assert_eq!(r.number, 10);

        let sw = RefDes::parse("SW2").unwrap();
        assert_eq!(sw.prefix, "SW");
        assert_eq!(sw.number, 2);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        // No numeric tail
        assert!(RefDes::parse("GND").is_none());
        // Unit suffix after the number
        assert!(RefDes::parse("U1A").is_none());
        // Zero padding would not round-trip
        assert!(RefDes::parse("R01").is_none());
        // Bare number
        assert!(RefDes::parse("42").is_none());
        assert!(RefDes::parse("").is_none());
    }

    #[test]
    fn test_parse_keeps_inner_digits_in_prefix() {
        // Only the trailing digit run is the number
        let r = RefDes::parse("H3A7").unwrap();
        assert_eq!(r.prefix, "H3A");
        assert_eq!(r.number, 7);
    }

    #[test]
    fn test_class_prefix() {
        assert_eq!(class_prefix("R10"), "R");
        assert_eq!(class_prefix("SW2"), "SW");
        assert_eq!(class_prefix("H3A7"), "H");
        assert_eq!(class_prefix("42"), "");
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("R9", "R10"), Ordering::Less);
        assert_eq!(natural_cmp("C2", "C2"), Ordering::Equal);
        assert_eq!(natural_cmp("R1", "C1"), Ordering::Greater);
    }
}
