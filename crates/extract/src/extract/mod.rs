//! Main extraction logic for PHP changelog pages.

use std::convert::Infallible;
use std::str::FromStr;

use crate::consts;
use crate::models::{Release, ReleaseMapping};
use scraper::{ElementRef, Html};
use tracing::instrument;

/// Extracts releases from a single changelog document.
///
/// Each release on a changelog page is an element carrying the `version` class
/// and the release identifier as its `id`, with the release date somewhere
/// inside it as the `datetime` attribute of a `releasedate` element:
///
/// ```html
/// <section class="version" id="7.0.0">
///     <h3>Version 7.0.0</h3>
///     <b><time class="releasedate" datetime="2015-12-03">03 Dec 2015</time></b>
///     ...
/// </section>
/// ```
#[derive(Debug)]
pub struct Extractor {
    document: Html,
}
impl Extractor {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    /// Parsing never fails: broken markup is recovered from as well as the
    /// HTML5 parsing algorithm allows.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            tracing::trace!(errors = document.errors.len(), "recovered from malformed changelog HTML");
        }
        Self::from_document(document)
    }

    /// Extracts every (non pre-release) release and its date.
    ///
    /// The release identifier is the `id` exactly as written (no trimming);
    /// elements with a missing or blank `id` are skipped. If a release is
    /// listed more than once, the last listing wins.
    #[instrument(skip(self), fields(releases))]
    pub fn releases(&self) -> ReleaseMapping {
        let mut releases = ReleaseMapping::new();
        for element in self.document.select(&consts::VERSION_SELECTOR) {
            let Some(release) = self::release(&element) else {
                continue;
            };
            if is_prerelease(release.as_str()) {
                tracing::debug!(%release, "skipping pre-release");
                continue;
            }
            let date = self::release_date(&element);
            releases.insert(release, date);
        }
        tracing::Span::current().record("releases", releases.len());
        releases
    }
}
impl FromStr for Extractor {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_html(s))
    }
}
impl From<String> for Extractor {
    fn from(value: String) -> Self {
        Self::from_html(&value)
    }
}
impl From<Html> for Extractor {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}

impl From<Extractor> for ReleaseMapping {
    fn from(extractor: Extractor) -> Self {
        extractor.releases()
    }
}

/// Reads the release identifier from the element's `id`.
fn release(element: &ElementRef<'_>) -> Option<Release> {
    let id = element.value().id()?;
    match id.parse::<Release>() {
        Ok(release) => Some(release),
        Err(_) => {
            tracing::debug!(id, "skipping release with a blank identifier");
            None
        },
    }
}

/// Reads the date from the last `releasedate` element within the release.
///
/// Missing dates (and `releasedate` elements without a `datetime`) produce an
/// empty string rather than dropping the release.
fn release_date(element: &ElementRef<'_>) -> String {
    element
        .select(&consts::RELEASE_DATE_SELECTOR)
        .last()
        .and_then(|date| date.value().attr("datetime"))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Returns `true` for identifiers that look like betas or release candidates.
///
/// This is deliberately blunt: ANY `R`, `C` or `b` (or `|`) in the identifier
/// marks it as a pre-release, not just an `RC<n>` or `b<n>` suffix.
///
/// ```rust
/// use php_releases_extract::is_prerelease;
/// assert!(is_prerelease("5.0.0RC1"));
/// assert!(is_prerelease("5.0.0b1"));
/// assert!(!is_prerelease("5.0.0"));
/// ```
pub fn is_prerelease(release: &str) -> bool {
    consts::PRERELEASE_REGEX.is_match(release)
}
