//! The release database and its queries.

use crate::error::{ErrorKind, Result};
use crate::{Location, snapshot};
use php_releases_extract::models::{Release, ReleaseMapping};
use std::collections::btree_map::Iter;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::instrument;

/// Strict `YYYY-MM-DD`, the format of the changelogs' `datetime` attributes.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Read-only database of PHP releases.
///
/// Constructed once, either from a mapping or by loading a snapshot, and never
/// modified afterwards. Pass it around by reference; there is no global
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseDatabase {
    releases: ReleaseMapping,
}

impl ReleaseDatabase {
    pub fn from_mapping(releases: ReleaseMapping) -> Self {
        Self { releases }
    }

    /// Load the database snapshot from the given location.
    #[instrument(fields(path = %location.path().display()))]
    pub fn load(location: &Location) -> Result<Self> {
        snapshot::load(location).map(Self::from_mapping)
    }

    /// Load the database snapshot from the default [`Location`].
    pub fn load_default() -> Result<Self> {
        Self::load(&Location::default())
    }

    /// All known releases, in natural release order.
    pub fn all(&self) -> &ReleaseMapping {
        &self.releases
    }

    pub fn into_mapping(self) -> ReleaseMapping {
        self.releases
    }

    /// Whether the release is known. The match is exact: no trimming,
    /// case-folding or other normalization is applied.
    pub fn exists(&self, release: &str) -> bool {
        self.releases.contains(release)
    }

    /// Returns the date the release was published.
    ///
    /// - `Ok(None)` if the release is unknown,
    /// - `Ok(Some(date))` if the release is known and has a valid date, or
    /// - [`ErrorKind::InvalidDate`] if the release is known but the changelog
    ///   didn't list a (valid) date for it.
    pub fn release_date(&self, release: &str) -> Result<Option<Date>> {
        let Some(value) = self.releases.get(release) else {
            return Ok(None);
        };
        match parse_date(value) {
            Some(date) => Ok(Some(date)),
            None => exn::bail!(ErrorKind::InvalidDate {
                release: release.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// The most recent release, by natural order.
    pub fn latest(&self) -> Option<&Release> {
        self.releases.last().map(|(release, _)| release)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Release, String> {
        self.releases.iter()
    }
}
/// `[year]` accepts a leading sign, so the shape is checked before parsing:
/// exactly ten bytes, starting with a digit.
fn parse_date(value: &str) -> Option<Date> {
    if value.len() != 10 || !value.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Date::parse(value, DATE_FORMAT).ok()
}

impl From<ReleaseMapping> for ReleaseDatabase {
    fn from(releases: ReleaseMapping) -> Self {
        Self::from_mapping(releases)
    }
}
impl<'a> IntoIterator for &'a ReleaseDatabase {
    type Item = (&'a Release, &'a String);
    type IntoIter = Iter<'a, Release, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.releases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge;
    use rstest::rstest;
    use tempfile::TempDir;
    use time::Month;

    const CHANGELOG_5: &str = include_str!("../../extract/tests/fixtures/changelog-5.html");
    const CHANGELOG_7: &str = include_str!("../../extract/tests/fixtures/changelog-7.html");

    fn database() -> ReleaseDatabase {
        let mut releases: ReleaseMapping =
            [("5.0.0", "2004-07-13"), ("5.0.1", ""), ("5.0.2", "13/07/2004"), ("7.0.0", "2015-12-03")]
                .into_iter()
                .collect();
        releases.insert("5.0.3", "2004-13-01");
        releases.insert("5.0.4", "+2004-07-13");
        releases.insert("5.0.5", "-2004-07-13");
        releases.insert("5.0.6", "2004-7-13");
        releases.insert("5.0.7", " 2004-07-13");
        ReleaseDatabase::from_mapping(releases)
    }

    /// The whole pipeline: extract both changelogs, merge, save and reload.
    fn generated(dir: &TempDir) -> ReleaseDatabase {
        let releases = merge([
            php_releases_extract::extract(CHANGELOG_5),
            php_releases_extract::extract(CHANGELOG_7),
        ]);
        let location = Location::new(dir.path());
        snapshot::save(&location, &releases).unwrap();
        ReleaseDatabase::load(&location).unwrap()
    }

    #[test]
    fn test_release_date() {
        let db = database();
        assert_eq!(db.release_date("5.0.0").unwrap(), Some(Date::from_calendar_date(2004, Month::July, 13).unwrap()));
        assert_eq!(db.release_date("7.0.0").unwrap(), Some(Date::from_calendar_date(2015, Month::December, 3).unwrap()));
    }

    #[rstest]
    #[case("6.0.0")]
    #[case("7.0")]
    #[case("")]
    fn test_release_date_unknown(#[case] release: &str) {
        assert_eq!(database().release_date(release).unwrap(), None);
    }

    #[rstest]
    #[case("5.0.1", "")]
    #[case("5.0.2", "13/07/2004")]
    #[case("5.0.3", "2004-13-01")]
    #[case("5.0.4", "+2004-07-13")]
    #[case("5.0.5", "-2004-07-13")]
    #[case("5.0.6", "2004-7-13")]
    #[case("5.0.7", " 2004-07-13")]
    fn test_release_date_invalid(#[case] release: &str, #[case] value: &str) {
        let err = database().release_date(release).unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidDate { release: r, value: v } if r == release && v == value));
    }

    #[test]
    fn test_exists_matches_all() {
        let db = database();
        for (release, _) in db.all() {
            assert!(db.exists(release.as_str()));
        }
        for release in ["6.0.0", "5.0", "5.0.00", "7.0.0 ", "v7.0.0"] {
            assert!(!db.exists(release));
            assert!(!db.all().contains(release));
        }
    }

    #[test]
    fn test_latest() {
        assert_eq!(database().latest().map(Release::as_str), Some("7.0.0"));
        assert_eq!(ReleaseDatabase::default().latest(), None);
    }

    #[test]
    fn test_generated_database() {
        let dir = TempDir::new().unwrap();
        let db = generated(&dir);
        assert_eq!(db.len(), 6);
        assert!(db.exists("5.0.0"));
        assert!(db.exists("7.0.0"));
        assert!(!db.exists("6.0.0"));
        assert!(!db.exists("5.0.0RC1"));
        assert!(!db.exists("5.0.0b1"));
        assert_eq!(db.release_date("5.0.0").unwrap(), Some(Date::from_calendar_date(2004, Month::July, 13).unwrap()));
        assert_eq!(db.release_date("7.0.0").unwrap(), Some(Date::from_calendar_date(2015, Month::December, 3).unwrap()));
        assert_eq!(db.release_date("6.0.0").unwrap(), None);
        let order: Vec<&str> = db.iter().map(|(release, _)| release.as_str()).collect();
        assert_eq!(order, ["5.0.0", "5.0.2", "5.0.10", "5.6.40", "7.0.0", "7.0.1"]);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let location = Location::new(dir.path());
        let original = database();
        snapshot::save(&location, original.all()).unwrap();
        assert_eq!(ReleaseDatabase::load(&location).unwrap(), original);
    }
}
