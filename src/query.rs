//! Read-only queries against a loaded database.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use php_releases_db::ReleaseDatabase;
use std::io::Write;

/// Writes every release and its date, tab separated, in release order.
pub fn list(db: &ReleaseDatabase, out: &mut impl Write) -> Result<()> {
    for (release, date) in db {
        writeln!(out, "{release}\t{date}").or_raise(|| ErrorKind::Output)?;
    }
    Ok(())
}

/// Writes `true` or `false`, returning whether the release exists.
pub fn exists(db: &ReleaseDatabase, release: &str, out: &mut impl Write) -> Result<bool> {
    let exists = db.exists(release);
    writeln!(out, "{exists}").or_raise(|| ErrorKind::Output)?;
    Ok(exists)
}

/// Writes the release date, returning `false` if the release is unknown.
///
/// A release with a missing or malformed date is an error, not "unknown".
pub fn date(db: &ReleaseDatabase, release: &str, out: &mut impl Write) -> Result<bool> {
    match db.release_date(release).or_raise(|| ErrorKind::Database)? {
        Some(date) => {
            writeln!(out, "{date}").or_raise(|| ErrorKind::Output)?;
            Ok(true)
        },
        None => Ok(false),
    }
}
