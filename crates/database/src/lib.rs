//! Read-only database of PHP releases and their release dates.
//!
//! The database is generated, never edited: the changelogs are scraped with
//! [`php_releases_extract`], the per-changelog mappings are [`merge`]d in
//! source order, and the result is saved as a snapshot. A [`ReleaseDatabase`]
//! is then loaded once and only ever queried.
//!
//! # Architecture
//! - **Snapshot**: the persisted JSON file at a well-known [`Location`],
//!   releases in natural order under a "generated, do not edit" marker.
//! - **ReleaseDatabase**: an immutable view over one snapshot; regenerating
//!   the snapshot produces a new database, it never mutates a loaded one.

mod db;
pub mod error;
mod location;
mod merge;
pub mod snapshot;

pub use crate::db::ReleaseDatabase;
pub use crate::location::{DB_FILENAME, DB_FOLDER, Location};
pub use crate::merge::merge;
pub use php_releases_extract::models::{Release, ReleaseMapping};
