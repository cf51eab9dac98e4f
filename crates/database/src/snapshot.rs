//! Persisted snapshot of the release database.
//!
//! The snapshot is a pretty-printed JSON object, releases in natural order:
//!
//! ```json
//! {
//!   "_generated": "DO NOT EDIT! ...",
//!   "releases": {
//!     "5.0.0": "2004-07-13",
//!     "5.0.1": ""
//!   }
//! }
//! ```

use crate::Location;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use php_releases_extract::models::ReleaseMapping;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind as IoErrorKind, Write};
use tempfile::NamedTempFile;
use tracing::instrument;

/// Marker written at the top of every snapshot.
pub const GENERATED_NOTICE: &str =
    "DO NOT EDIT! This file has been automatically generated. Run `php-releases update` to fetch a new version.";

#[derive(Serialize)]
struct SnapshotRef<'a> {
    #[serde(rename = "_generated")]
    notice: &'a str,
    releases: &'a ReleaseMapping,
}

#[derive(Deserialize)]
struct Snapshot {
    #[serde(rename = "_generated")]
    notice: String,
    releases: ReleaseMapping,
}

/// Serializes a mapping into snapshot form.
pub fn to_string(releases: &ReleaseMapping) -> Result<String> {
    let snapshot = SnapshotRef {
        notice: GENERATED_NOTICE,
        releases,
    };
    let mut json = serde_json::to_string_pretty(&snapshot).or_raise(|| ErrorKind::InvalidData("serialize"))?;
    json.push('\n');
    Ok(json)
}

/// Deserializes a snapshot. Anything without the generated marker is
/// rejected; it wasn't written by [`save`].
pub fn from_str(json: &str) -> Result<ReleaseMapping> {
    let snapshot: Snapshot = serde_json::from_str(json).or_raise(|| ErrorKind::InvalidData("deserialize"))?;
    if snapshot.notice.trim().is_empty() {
        exn::bail!(ErrorKind::InvalidData("missing generated marker"));
    }
    Ok(snapshot.releases)
}

/// Writes the snapshot to its location, creating the folder if needed.
///
/// The snapshot is written to a temporary file next to the destination and
/// renamed into place, so a failure never leaves a partially written database
/// behind.
#[instrument(skip(releases), fields(path = %location.path().display(), releases = releases.len()))]
pub fn save(location: &Location, releases: &ReleaseMapping) -> Result<()> {
    let json = to_string(releases)?;
    let folder = location.folder();
    fs::create_dir_all(folder).map_err(ErrorKind::Io)?;
    let mut file = NamedTempFile::new_in(folder).map_err(ErrorKind::Io)?;
    file.write_all(json.as_bytes()).map_err(ErrorKind::Io)?;
    file.as_file().sync_all().map_err(ErrorKind::Io)?;
    file.persist(location.path()).map_err(|e| ErrorKind::Io(e.error))?;
    tracing::debug!("saved release database");
    Ok(())
}

/// Reads the snapshot from its location.
#[instrument(fields(path = %location.path().display()))]
pub fn load(location: &Location) -> Result<ReleaseMapping> {
    let path = location.path();
    let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
        IoErrorKind::NotFound => ErrorKind::NotFound(path.clone()),
        _ => ErrorKind::Io(e),
    })?;
    let releases = from_str(&json)?;
    tracing::debug!(releases = releases.len(), "loaded release database");
    Ok(releases)
}
