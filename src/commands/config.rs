//! Config command - inspect configuration

use crate::{IconrError, cli::ConfigCommands, config::IconrConfig};
use std::io::Write;

type Result<T> = std::result::Result<T, IconrError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be serialized or its path
/// cannot be determined
pub fn execute<W: Write>(config: &IconrConfig, command: &ConfigCommands, out: &mut W) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(config)?;
            write!(out, "{text}")?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", IconrConfig::config_path()?.display())?;
        }
    }
    Ok(())
}
