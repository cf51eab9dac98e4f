use super::Release;
use std::collections::BTreeMap;
use std::collections::btree_map::{IntoIter, Iter};

/// Mapping of release identifier to release date.
///
/// Dates are kept exactly as found in the changelog: an ISO `YYYY-MM-DD`
/// string, or empty when the changelog didn't list a date for that release.
/// Parsing them is left to whoever queries the mapping.
///
/// Keys are unique and always iterated in natural release order, so inserting
/// the same release twice overwrites the earlier date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReleaseMapping {
    releases: BTreeMap<Release, String>,
}
impl ReleaseMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or overwrites) the date of a release, returning the previous
    /// date if the release was already known.
    pub fn insert(&mut self, release: impl Into<Release>, date: impl Into<String>) -> Option<String> {
        self.releases.insert(release.into(), date.into())
    }

    /// Returns the raw date string stored for a release.
    pub fn get(&self, release: &str) -> Option<&str> {
        self.releases.get(&Release::from(release)).map(String::as_str)
    }

    /// Exact, case-sensitive check for a release.
    pub fn contains(&self, release: &str) -> bool {
        self.releases.contains_key(&Release::from(release))
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

    /// Returns the release that sorts last.
    pub fn last(&self) -> Option<(&Release, &str)> {
        self.releases.last_key_value().map(|(release, date)| (release, date.as_str()))
    }

    /// Merges another mapping into this one; on conflict, `other` wins.
    pub fn merge(&mut self, other: ReleaseMapping) {
        self.releases.extend(other.releases);
    }
}
impl<R: Into<Release>, D: Into<String>> FromIterator<(R, D)> for ReleaseMapping {
    fn from_iter<T: IntoIterator<Item = (R, D)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}
impl<R: Into<Release>, D: Into<String>> Extend<(R, D)> for ReleaseMapping {
    fn extend<T: IntoIterator<Item = (R, D)>>(&mut self, iter: T) {
        for (release, date) in iter {
            self.insert(release, date);
        }
    }
}
impl IntoIterator for ReleaseMapping {
    type Item = (Release, String);
    type IntoIter = IntoIter<Release, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.releases.into_iter()
    }
}
impl<'a> IntoIterator for &'a ReleaseMapping {
    type Item = (&'a Release, &'a String);
    type IntoIter = Iter<'a, Release, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.releases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut mapping = ReleaseMapping::new();
        assert_eq!(mapping.insert("7.0.0", "2015-11-01"), None);
        assert_eq!(mapping.insert("7.0.0", "2015-12-03"), Some("2015-11-01".to_string()));
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("7.0.0"), Some("2015-12-03"));
    }

    #[test]
    fn test_merge_later_wins() {
        let mut mapping: ReleaseMapping = [("5.6.0", "2014-08-28"), ("7.0.0", "2015-11-01")].into_iter().collect();
        mapping.merge([("7.0.0", "2015-12-03"), ("7.0.1", "2015-12-17")].into_iter().collect());
        assert_eq!(mapping.get("5.6.0"), Some("2014-08-28"));
        assert_eq!(mapping.get("7.0.0"), Some("2015-12-03"));
        assert_eq!(mapping.get("7.0.1"), Some("2015-12-17"));
    }

    #[test]
    fn test_iterates_in_natural_order() {
        let mapping: ReleaseMapping = [("5.0.10", ""), ("5.0.2", ""), ("5.0.9", "")].into_iter().collect();
        let keys: Vec<&str> = mapping.iter().map(|(release, _)| release.as_str()).collect();
        assert_eq!(keys, ["5.0.2", "5.0.9", "5.0.10"]);
        assert_eq!(mapping.last().map(|(release, _)| release.as_str()), Some("5.0.10"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let mapping: ReleaseMapping = [("7.0.0", "2015-12-03")].into_iter().collect();
        assert!(mapping.contains("7.0.0"));
        assert!(!mapping.contains("7.0"));
        assert!(!mapping.contains("7.0.00"));
        assert!(!mapping.contains(" 7.0.0"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_in_natural_order() {
        let mapping: ReleaseMapping = [("5.0.10", "2005-04-05"), ("5.0.2", "")].into_iter().collect();
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, r#"{"5.0.2":"","5.0.10":"2005-04-05"}"#);
        let decoded: ReleaseMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, mapping);
    }
}
