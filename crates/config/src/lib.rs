//! Configuration for regenerating and querying the release database.
//!
//! Layered, lowest priority first:
//! 1. built-in defaults,
//! 2. a TOML file (given explicitly, or `php-releases.toml` in the platform
//!    configuration directory), and
//! 3. environment variables prefixed with `PHP_RELEASES_`.

pub mod error;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use php_releases_db::Location;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const CONFIG_FILENAME: &str = "php-releases.toml";
pub const ENV_PREFIX: &str = "PHP_RELEASES_";
// Changelogs are large, and php.net can be slow.
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// A changelog page to scrape releases from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}
impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder containing the database snapshot. Defaults to the platform data
    /// directory, see [`Location::default`].
    pub data_dir: PathBuf,
    /// Changelogs, in merge order: later sources win on duplicate releases.
    pub sources: Vec<Source>,
    /// Timeout for fetching a single changelog.
    pub timeout_secs: u64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Location::default().folder().to_path_buf(),
            sources: vec![
                Source::new("PHP 5", "https://www.php.net/ChangeLog-5.php"),
                Source::new("PHP 7", "https://www.php.net/ChangeLog-7.php"),
            ],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
impl Config {
    /// Load, merge and validate the configuration.
    ///
    /// An explicitly given file must exist; the default file is optional.
    #[instrument]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        if let Some(file) = file
            && !file.is_file()
        {
            exn::bail!(ErrorKind::NotFound(file.to_path_buf()));
        }
        let config: Self = Self::figment(file).extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// The layered configuration sources, before extraction.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = file.map(Path::to_path_buf).or_else(Self::default_file) {
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// `php-releases.toml` in the platform-specific configuration directory.
    pub fn default_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "php-releases").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            exn::bail!(ErrorKind::Invalid("at least one changelog source is required".to_string()));
        }
        for source in &self.sources {
            if !(source.url.starts_with("https://") || source.url.starts_with("http://")) {
                exn::bail!(ErrorKind::Invalid(format!(
                    "changelog source '{}' must be an HTTP(S) URL, found: {}",
                    source.name, source.url
                )));
            }
        }
        if self.timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Location of the database snapshot.
    pub fn location(&self) -> Location {
        Location::new(&self.data_dir)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
