mod cli;
mod error;
mod fetch;
mod query;
mod update;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use exn::ResultExt;
use php_releases_config::Config;
use php_releases_db::{Location, ReleaseDatabase};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::{ErrorKind, Result};
use crate::fetch::HttpFetcher;

const CRATES: [&str; 4] = ["php_releases", "php_releases_config", "php_releases_db", "php_releases_extract"];

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:?}");
            ExitCode::from(2)
        },
    }
}

/// Logs go to stderr so that query output stays pipeable.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATES.iter().map(|name| format!("{name}={level}")).collect();
        EnvFilter::new(format!("warn,{}", directives.join(",")))
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Loaded once per invocation, then only ever borrowed by the queries.
fn load(location: &Location) -> Result<ReleaseDatabase> {
    ReleaseDatabase::load(location).or_raise(|| ErrorKind::Database)
}

fn exit_code(found: bool) -> ExitCode {
    if found { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let location = config.location();
    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Update => {
            let fetcher = HttpFetcher::new(config.timeout())?;
            update::update(&config, &fetcher)?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Location => {
            writeln!(stdout, "{}", location.path().display()).or_raise(|| ErrorKind::Output)?;
            Ok(ExitCode::SUCCESS)
        },
        Command::List => {
            let db = load(&location)?;
            query::list(&db, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Exists { release } => {
            let db = load(&location)?;
            Ok(exit_code(query::exists(&db, &release, &mut stdout)?))
        },
        Command::Date { release } => {
            let db = load(&location)?;
            let found = query::date(&db, &release, &mut stdout)?;
            if !found {
                tracing::warn!(%release, "unknown release");
            }
            Ok(exit_code(found))
        },
    }
}
