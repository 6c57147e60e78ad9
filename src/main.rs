//! Bookfinder CLI application entry point
//!
//! Searches the Open Library catalogue by title, author or subject, either in
//! an interactive terminal browser or as a one-shot command.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! bookfinder
//! bookfinder browse the left hand of darkness
//!
//! # Print results once
//! bookfinder search dune --ebook --from 1960
//! bookfinder search -f author le guin --details
//! bookfinder search dune --json
//! bookfinder search dune --open 1
//!
//! # Configuration
//! bookfinder config set limit=40
//! bookfinder config get
//!
//! # Quiet mode (only output results)
//! bookfinder -q search dune
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/bookfinder/config.toml` on Linux) and created with defaults on
//! first run. Every key can be overridden with a `BOOKFINDER_` environment
//! variable.

use bookfinder::{
    BookFinderError,
    cli::{Cli, Commands, join_query},
    client::OpenLibraryClient,
    commands::{self, SearchOptions},
    config::BookFinderConfig,
    logging::{self, LogTarget},
    ui::{OutputWriter, StdoutWriter},
};
use std::io;
use std::process::ExitCode;
use tracing::debug;

type Result<T> = std::result::Result<T, BookFinderError>;

fn run(cli: &Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => BookFinderConfig::config_path()?,
    };
    let mut config = BookFinderConfig::load_from(&config_path)?;

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    let target = if matches!(command, Commands::Browse { .. }) {
        LogTarget::FileOnly
    } else {
        LogTarget::Stderr
    };
    logging::init(&config, target)?;
    debug!(path = %config_path.display(), "configuration loaded");

    match command {
        Commands::Browse {
            query,
            field,
            filters,
        } => {
            let field = field.unwrap_or(config.default_field);
            commands::browse(&config, join_query(&query), field, filters.to_input())?;
        }
        Commands::Search {
            query,
            field,
            filters,
            details,
            json,
            open,
        } => {
            let options = SearchOptions {
                query: join_query(&query),
                field: field.unwrap_or(config.default_field),
                filters: filters.to_input(),
                details,
                json,
                open,
                quiet,
            };
            let client = OpenLibraryClient::new(config.endpoints(), config.timeout())?;
            commands::search(
                &client,
                &config,
                &options,
                &mut io::stdout().lock(),
                &StdoutWriter::quiet(quiet),
                |url| open::that(url),
            )?;
        }
        Commands::Config { command } => {
            commands::config(
                &command,
                &mut config,
                &config_path,
                &mut io::stdout().lock(),
                &StdoutWriter::quiet(quiet),
            )?;
        }
        Commands::Completions { shell } => {
            commands::completions(shell, &mut io::stdout().lock());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
