//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for iconr using the `clap` crate.
//! It provides command parsing, argument validation, and helpers that turn
//! parsed arguments into a [`QueryState`].
//!
//! # Commands
//!
//! - **search**: Fuzzy search icons by name, alias or category
//! - **categories**: List the category vocabulary with counts
//! - **recent**: Show recently added icons (default)
//! - **show**: Show the full record of one icon
//! - **count**: Print the number of icons
//! - **config**: Inspect configuration
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use iconr::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["iconr", "search", "home", "assistant", "-c", "smart-home"]);
//! assert!(matches!(cli.get_command(), Commands::Search(_)));
//! ```

use crate::config::IconrConfig;
use crate::search::{QueryState, SortMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format for result listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable, colored when attached to a terminal
    #[default]
    Text,
    /// JSON array of `{name, data}` objects
    Json,
}

/// Arguments for the search command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Search text (several words are joined with spaces)
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Only icons in these categories (can specify multiple: -c media -c dns)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Result ordering (overrides config)
    #[arg(short = 's', long = "sort", value_enum)]
    pub sort: Option<SortMode>,

    /// Maximum number of results (overrides config; 0 = unlimited)
    #[arg(short = 'l', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Show the relevance score next to each result
    #[arg(long = "scores")]
    pub scores: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SearchArgs {
    /// The query text as a single string
    #[must_use]
    pub fn text(&self) -> String {
        self.query.join(" ")
    }

    /// Build the query, filling unset options from the configuration
    #[must_use]
    pub fn to_query_state(&self, config: &IconrConfig) -> QueryState {
        QueryState::builder()
            .text(self.text())
            .categories(self.categories.iter().cloned())
            .sort(self.sort.unwrap_or(config.default_sort))
            .maybe_limit(self.limit.or(config.default_limit))
            .build()
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "iconr")]
#[command(about = "Fuzzy search for dashboard icons", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Path to the icon metadata document (overrides config)
    #[arg(long = "metadata", value_name = "PATH", global = true)]
    pub metadata: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Search icons by name, alias or category
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// List all categories with icon counts
    #[command(visible_alias = "cats")]
    Categories,

    /// Show recently added icons (default)
    Recent {
        /// Number of icons to show (overrides config)
        #[arg(short = 'n', long = "count", value_name = "N")]
        count: Option<usize>,
    },

    /// Show all metadata for one icon
    Show {
        /// Exact icon name
        name: String,
    },

    /// Print the number of icons
    Count,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the location of the configuration file
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Recent if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Recent { count: None })
    }
}
