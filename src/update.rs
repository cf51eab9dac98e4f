//! Regenerating the release database from the changelogs.

use crate::error::{ErrorKind, Result};
use crate::fetch::Fetch;
use exn::ResultExt;
use php_releases_config::Config;
use php_releases_db::{ReleaseMapping, merge, snapshot};
use tracing::instrument;

/// Fetches and extracts every configured changelog, merges them in source
/// order, and replaces the database snapshot.
///
/// All changelogs are fetched before anything is written: a failure on any
/// source leaves the existing database untouched.
#[instrument(skip_all, fields(sources = config.sources.len()))]
pub fn update(config: &Config, fetcher: &impl Fetch) -> Result<ReleaseMapping> {
    tracing::info!("fetching changelogs from the official PHP website");
    let mut pages = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        tracing::info!(source = %source.name, url = %source.url, "fetching changelog");
        pages.push((source, fetcher.fetch(&source.url)?));
    }

    tracing::info!("parsing changelogs to extract releases");
    let mut mappings = Vec::with_capacity(pages.len());
    for (source, html) in pages {
        let releases = php_releases_extract::extract(html);
        tracing::info!(source = %source.name, releases = releases.len(), "parsed changelog");
        mappings.push(releases);
    }
    let releases = merge(mappings);
    if releases.is_empty() {
        exn::bail!(ErrorKind::NoReleases);
    }

    let location = config.location();
    snapshot::save(&location, &releases).or_raise(|| ErrorKind::Database)?;
    tracing::info!(path = %location.path().display(), releases = releases.len(), "the PHP releases database has been updated");
    Ok(releases)
}
