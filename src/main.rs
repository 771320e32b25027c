//! Iconr CLI application entry point
//!
//! Command-line front end for the icon search engine. It loads the icon
//! metadata document once, then runs one command against it.
//!
//! # Usage
//!
//! ```bash
//! # Recently added icons (default command)
//! iconr
//!
//! # Fuzzy search, optionally filtered and sorted
//! iconr search home assistant
//! iconr search git -c dev-tools -s name-asc -l 10
//!
//! # Category vocabulary, single icon, total count
//! iconr categories
//! iconr show github
//! iconr count
//!
//! # Use a specific metadata file
//! iconr --metadata ./metadata.json search plex
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/iconr/config.toml` on Linux) and created on first run.

use clap::CommandFactory;
use colored::Colorize;
use iconr::{
    IconrError,
    cli::{Cli, Commands},
    commands,
    config::IconrConfig,
    icons::IconCatalog,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, IconrError>;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut out);
        return Ok(());
    }

    let config = IconrConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &command {
        return commands::config(&config, command, &mut out);
    }

    let metadata_path = config.resolve_metadata_path(cli.metadata.as_deref());
    let catalog = IconCatalog::load(&metadata_path)?;
    tracing::info!(icons = catalog.len(), path = %metadata_path.display(), "catalog ready");

    match command {
        Commands::Search(args) => commands::search(&catalog, &args, &config, quiet, &mut out)?,
        Commands::Categories => commands::categories(&catalog, quiet, &mut out)?,
        Commands::Recent { count } => {
            let count = count.unwrap_or(config.recent_count);
            if count == 0 {
                return Err(IconrError::InvalidInput("Recent count must be greater than zero".into()));
            }
            commands::recent(&catalog, count, quiet, &mut out)?;
        }
        Commands::Show { name } => commands::show(&catalog, &name, &mut out)?,
        Commands::Count => writeln!(out, "{}", catalog.len())?,
        Commands::Config { .. } | Commands::Completions { .. } => {}
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
