//! Recent command - show the most recently added icons

use crate::{IconrError, icons::IconCatalog, output};
use std::io::Write;

type Result<T> = std::result::Result<T, IconrError>;

/// Execute the recent command
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute<W: Write>(catalog: &IconCatalog, count: usize, quiet: bool, out: &mut W) -> Result<()> {
    let recent = catalog.recently_added(count);

    if recent.is_empty() {
        if !quiet {
            writeln!(out, "No icons found.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Recently added ({} of {}):", recent.len(), catalog.len())?;
    }
    for icon in recent {
        writeln!(out, "{}", output::recent_icon(icon, quiet))?;
    }
    Ok(())
}
