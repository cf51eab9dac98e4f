use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// A release identifier, such as `7.0.0`.
///
/// Releases are ordered naturally: numeric runs are compared as numbers, so
/// `5.0.2 < 5.0.10`. See the `compare` module for the details.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Release(String);
impl Release {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
impl FromStr for Release {
    type Err = Error;
    /// Keeps the identifier exactly as written; only blank identifiers are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            exn::bail!(ErrorKind::ParseError {
                field: "release",
                value: format!("blank release identifier: {s:?}"),
            });
        }
        Ok(Self(s.to_string()))
    }
}
impl From<&str> for Release {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl From<String> for Release {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl AsRef<str> for Release {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl Display for Release {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7.0.0", "7.0.0")]
    #[case(" 5.6.40\n", " 5.6.40\n")]
    fn test_parse(#[case] input: &str, #[case] expected: &str) {
        let release: Release = input.parse().unwrap();
        assert_eq!(release.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_parse_blank(#[case] input: &str) {
        assert!(input.parse::<Release>().is_err());
    }
}
