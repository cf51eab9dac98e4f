//! Extraction of PHP releases and their release dates from the official
//! changelog pages.
//!
//! Extraction is best-effort: the changelogs are loosely structured HTML, and
//! anything that can't be understood is simply left out of the resulting
//! [`ReleaseMapping`](models::ReleaseMapping).

mod compare;
mod consts;
pub mod error;
mod extract;
pub mod models;

use tracing::instrument;

pub use crate::extract::{Extractor, is_prerelease};
use crate::models::ReleaseMapping;

/// Easy, top-level entrypoint for the extraction of a [`ReleaseMapping`] from
/// raw changelog HTML bytes.
///
/// Accepts raw bytes, instead of requiring HTML to be valid UTF-8. Invalid byte
/// sequences are replaced with U+FFFD during parsing. See [`Extractor`] for
/// more details.
///
/// # Examples
///
/// ```rust
/// let html = r#"
///     <section class="version" id="7.0.0">
///         <time class="releasedate" datetime="2015-12-03">03 Dec 2015</time>
///     </section>
/// "#;
/// let releases = php_releases_extract::extract(html);
/// assert_eq!(releases.get("7.0.0"), Some("2015-12-03"));
/// ```
#[instrument(skip(html), fields(html_size = html.as_ref().len()))]
pub fn extract(html: impl AsRef<[u8]>) -> ReleaseMapping {
    let html = String::from_utf8_lossy(html.as_ref());
    Extractor::from_html(&html).releases()
}
