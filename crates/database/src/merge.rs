use php_releases_extract::models::ReleaseMapping;
use tracing::instrument;

/// Merges per-changelog mappings into a single mapping.
///
/// Sources are applied in order, so when two changelogs list the same release
/// the later changelog's date wins. The result iterates (and is saved) in
/// natural release order regardless of the order of the sources.
#[instrument(skip(sources), fields(sources, releases))]
pub fn merge(sources: impl IntoIterator<Item = ReleaseMapping>) -> ReleaseMapping {
    let mut merged = ReleaseMapping::new();
    let mut count = 0_usize;
    for source in sources {
        merged.merge(source);
        count += 1;
    }
    let span = tracing::Span::current();
    span.record("sources", count);
    span.record("releases", merged.len());
    merged
}
