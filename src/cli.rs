//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for bookfinder using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser (default)
//! - **search**: One-shot search printing result cards
//! - **config**: Read and change configuration values
//! - **completions**: Print shell completion scripts
//!
//! Query words may be given unquoted; they are joined with single spaces.
//!
//! # Examples
//!
//! ```
//! use bookfinder::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["bookfinder", "search", "the", "hobbit", "-f", "title"]);
//! if let Commands::Search { query, .. } = cli.get_command() {
//!     assert_eq!(bookfinder::cli::join_query(&query), "the hobbit");
//! }
//! ```

use crate::filters::{FilterCriteria, FilterError};
use crate::model::SearchField;
use crate::search::FilterInput;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Client-side filter flags shared by `browse` and `search`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only keep records with a borrowable or public eBook
    #[arg(long = "ebook")]
    pub ebook: bool,

    /// Earliest first-publish year (inclusive)
    #[arg(long = "from", value_name = "YEAR")]
    pub year_from: Option<String>,

    /// Latest first-publish year (inclusive)
    #[arg(long = "to", value_name = "YEAR")]
    pub year_to: Option<String>,
}

impl FilterArgs {
    /// Raw filter text, as the TUI filter panel holds it
    #[must_use]
    pub fn to_input(&self) -> FilterInput {
        FilterInput {
            ebook_only: self.ebook,
            year_from: self.year_from.clone().unwrap_or_default(),
            year_to: self.year_to.clone().unwrap_or_default(),
        }
    }

    /// Validated criteria
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidYear` if a year is not a whole number.
    pub fn criteria(&self) -> Result<FilterCriteria, FilterError> {
        self.to_input().criteria()
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., limit=40)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value, or all values when no key is given
    Get {
        /// Configuration key to retrieve (e.g., search_host)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },

    /// Print the location of the configuration file
    Path,
}

#[derive(Parser, Debug)]
#[command(name = "bookfinder")]
#[command(about = "Search the Open Library catalogue from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse search results interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial query; searched immediately when given
        #[arg(value_name = "QUERY")]
        query: Vec<String>,

        /// Field the query is matched against
        #[arg(short = 'f', long = "field", value_enum)]
        field: Option<SearchField>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Search once and print the results
    #[command(visible_alias = "s")]
    Search {
        /// Query text
        #[arg(value_name = "QUERY", required = true)]
        query: Vec<String>,

        /// Field the query is matched against
        #[arg(short = 'f', long = "field", value_enum)]
        field: Option<SearchField>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print the full detail view for every result
        #[arg(short = 'd', long = "details", conflicts_with = "json")]
        details: bool,

        /// Print the filtered records as JSON
        #[arg(long = "json")]
        json: bool,

        /// Open the N-th result's page in the browser (1-based)
        #[arg(short = 'o', long = "open", value_name = "N")]
        open: Option<usize>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: Vec::new(),
            field: None,
            filters: FilterArgs::default(),
        })
    }
}

/// Join query words given on the command line
#[must_use]
pub fn join_query(words: &[String]) -> String {
    words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `key=value` from `config set`
///
/// # Errors
///
/// Returns a message if the setting has no `=` or an empty key.
pub fn parse_setting(setting: &str) -> Result<(&str, &str), String> {
    match setting.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(format!("Expected KEY=VALUE, got '{setting}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::YearBound;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["bookfinder"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: Vec::new(),
                field: None,
                filters: FilterArgs::default(),
            }
        );
    }

    #[test]
    fn test_parse_browse_with_query_and_field() {
        let cli = Cli::parse_from(["bookfinder", "b", "ursula", "le", "guin", "-f", "author"]);
        let Commands::Browse { query, field, .. } = cli.get_command() else {
            panic!("Expected Browse command");
        };
        assert_eq!(join_query(&query), "ursula le guin");
        assert_eq!(field, Some(SearchField::Author));
    }

    #[test]
    fn test_parse_search_with_filters() {
        let cli = Cli::parse_from([
            "bookfinder", "search", "dune", "--ebook", "--from", "1965", "--to", "1970", "-d",
        ]);
        let Commands::Search {
            query,
            filters,
            details,
            json,
            ..
        } = cli.get_command()
        else {
            panic!("Expected Search command");
        };

        assert_eq!(query, vec!["dune"]);
        assert!(details);
        assert!(!json);
        let criteria = filters.criteria().unwrap();
        assert!(criteria.ebook_only);
        assert_eq!(criteria.year_from, Some(1965));
        assert_eq!(criteria.year_to, Some(1970));
    }

    #[test]
    fn test_invalid_year_is_rejected_by_criteria_not_parser() {
        let cli = Cli::parse_from(["bookfinder", "search", "dune", "--from", "sixties"]);
        let Commands::Search { filters, .. } = cli.get_command() else {
            panic!("Expected Search command");
        };
        assert!(matches!(
            filters.criteria(),
            Err(FilterError::InvalidYear {
                bound: YearBound::From,
                ..
            })
        ));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["bookfinder", "search"]).is_err());
    }

    #[test]
    fn test_details_conflicts_with_json() {
        assert!(Cli::try_parse_from(["bookfinder", "search", "dune", "--details", "--json"]).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Cli::try_parse_from(["bookfinder", "search", "dune", "-f", "isbn"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bookfinder", "config", "path", "-q", "--config", "/tmp/bf.toml"]);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bf.toml")));
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Path
            }
        );
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["bookfinder", "completions", "zsh"]);
        assert_eq!(cli.get_command(), Commands::Completions { shell: Shell::Zsh });
    }

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("limit=40"), Ok(("limit", "40")));
        assert_eq!(parse_setting("log_file="), Ok(("log_file", "")));
        assert!(parse_setting("limit").is_err());
        assert!(parse_setting("=40").is_err());
    }

    #[test]
    fn test_join_query_drops_blank_words() {
        let words = vec![" the ".to_string(), String::new(), "hobbit".to_string()];
        assert_eq!(join_query(&words), "the hobbit");
    }
}
