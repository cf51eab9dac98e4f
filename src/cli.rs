use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Database of PHP releases and their release dates, scraped from the
/// official changelogs.
#[derive(Debug, Parser)]
#[command(name = "php-releases", version, about)]
pub struct Cli {
    /// Configuration file (defaults to `php-releases.toml` in the platform configuration directory).
    #[arg(short, long, global = true, env = "PHP_RELEASES_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Increase logging verbosity (repeatable). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch the changelogs and regenerate the database.
    Update,
    /// List every known release and its release date.
    List,
    /// Check whether a release exists (exit code 1 if it doesn't).
    Exists {
        /// Release identifier, for example `7.0.0`.
        release: String,
    },
    /// Print the release date of a release (exit code 1 if it doesn't exist).
    Date {
        /// Release identifier, for example `7.0.0`.
        release: String,
    },
    /// Print the location of the database file.
    Location,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["php-releases", "update"], Command::Update)]
    #[case(&["php-releases", "list"], Command::List)]
    #[case(&["php-releases", "exists", "7.0.0"], Command::Exists { release: "7.0.0".to_string() })]
    #[case(&["php-releases", "date", "5.0.0"], Command::Date { release: "5.0.0".to_string() })]
    #[case(&["php-releases", "location"], Command::Location)]
    fn test_parse_command(#[case] args: &[&str], #[case] expected: Command) {
        assert_eq!(Cli::try_parse_from(args).unwrap().command, expected);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["php-releases", "list", "-vv", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[rstest]
    #[case(&["php-releases"])]
    #[case(&["php-releases", "exists"])]
    #[case(&["php-releases", "unknown"])]
    fn test_invalid(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
