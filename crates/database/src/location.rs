use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Fallback folder (relative to the working directory) holding the database,
/// for platforms without a user data directory.
pub const DB_FOLDER: &str = "data";
/// Fixed filename of the database snapshot within its folder.
pub const DB_FILENAME: &str = "php-releases.json";

/// Where the database snapshot lives: a configurable folder plus the fixed
/// [`DB_FILENAME`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    folder: PathBuf,
    filename: &'static str,
}
impl Location {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            filename: DB_FILENAME,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn filename(&self) -> &'static str {
        self.filename
    }

    /// Full path to the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.folder.join(self.filename)
    }
}
impl Default for Location {
    /// `php-releases` in the platform data directory (`~/.local/share` and
    /// friends), independent of the working directory.
    fn default() -> Self {
        match ProjectDirs::from("", "", "php-releases") {
            Some(dirs) => Self::new(dirs.data_dir()),
            None => Self::new(DB_FOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location() {
        let location = Location::default();
        assert_eq!(location.filename(), DB_FILENAME);
        assert!(location.path().ends_with(DB_FILENAME));
        if ProjectDirs::from("", "", "php-releases").is_some() {
            assert!(location.folder().is_absolute());
        } else {
            assert_eq!(location.folder(), Path::new(DB_FOLDER));
        }
    }

    #[test]
    fn test_fallback_folder() {
        let location = Location::new(DB_FOLDER);
        assert_eq!(location.path(), Path::new("data").join("php-releases.json"));
    }

    #[test]
    fn test_custom_folder() {
        let location = Location::new("/var/lib/php-releases");
        assert_eq!(location.path(), Path::new("/var/lib/php-releases/php-releases.json"));
    }
}
