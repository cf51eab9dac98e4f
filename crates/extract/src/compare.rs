//! Release Comparison
//!
//! Natural ("human") ordering of release identifiers, so that `5.0.9` sorts
//! before `5.0.10` and the persisted database reads top-to-bottom in release
//! order.

use crate::models::Release;
use std::cmp::Ordering;

/// A run of either ASCII digits or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}
impl<'a> Chunk<'a> {
    fn split(s: &'a str) -> impl Iterator<Item = Chunk<'a>> + 'a {
        let mut rest = s;
        std::iter::from_fn(move || {
            let first = rest.chars().next()?;
            let numeric = first.is_ascii_digit();
            let end = rest.find(|c: char| c.is_ascii_digit() != numeric).unwrap_or(rest.len());
            let (chunk, remainder) = rest.split_at(end);
            rest = remainder;
            Some(if numeric { Chunk::Number(chunk) } else { Chunk::Text(chunk) })
        })
    }

    /// Compares by value, so `Number("01")` and `Number("1")` are equal here
    /// even though they aren't `==`.
    fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Number(a), Chunk::Number(b)) => compare_digits(a, b),
            // Digits sort before letters, same as a plain byte-wise comparison would.
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
        }
    }
}

/// Compare two runs of ASCII digits by numeric value, without parsing them
/// (so arbitrarily long runs can't overflow).
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural ordering of two strings.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
    // Step 1: Compare chunk-by-chunk, numbers by value.
    let mut left = Chunk::split(a);
    let mut right = Chunk::split(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match l.cmp_value(&r) {
                Ordering::Equal => continue,
                ordering => return ordering,
            },
        }
    }
    // Step 2: Numerically equal (`5.0.01` vs `5.0.1`), fall back to bytes so
    // that the ordering stays consistent with equality.
    a.cmp(b)
}

impl Ord for Release {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(self.as_str(), other.as_str())
    }
}
impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5.0.2", "5.0.10", Ordering::Less)]
    #[case("5.0.10", "5.1.0", Ordering::Less)]
    #[case("5.0.0", "5.0.1", Ordering::Less)]
    #[case("7.0.0", "5.6.40", Ordering::Greater)]
    #[case("5.0.1", "5.0.1", Ordering::Equal)]
    #[case("5.0.1", "5.0.01", Ordering::Greater)]
    #[case("5.0", "5.0.0", Ordering::Less)]
    #[case("5.0.0", "5.0.0a", Ordering::Less)]
    #[case("99999999999999999999999.1", "100000000000000000000000.0", Ordering::Less)]
    fn test_natural_cmp(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(natural_cmp(a, b), expected);
        assert_eq!(natural_cmp(b, a), expected.reverse());
    }

    #[test]
    fn test_sort_releases() {
        let mut releases: Vec<Release> = ["5.0.10", "5.0.2", "5.0.9", "5.1.0", "5.0.0"].into_iter().map(Release::from).collect();
        releases.sort();
        let sorted: Vec<&str> = releases.iter().map(Release::as_str).collect();
        assert_eq!(sorted, ["5.0.0", "5.0.2", "5.0.9", "5.0.10", "5.1.0"]);
    }

    #[test]
    fn test_split_chunks() {
        let chunks: Vec<_> = Chunk::split("5.10rc2").collect();
        assert_eq!(
            chunks,
            [
                Chunk::Number("5"),
                Chunk::Text("."),
                Chunk::Number("10"),
                Chunk::Text("rc"),
                Chunk::Number("2")
            ]
        );
    }
}
