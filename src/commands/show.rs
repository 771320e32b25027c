//! Show command - print one icon's metadata

use crate::{IconrError, icons::IconCatalog, output};
use std::io::Write;

type Result<T> = std::result::Result<T, IconrError>;

/// Execute the show command
///
/// # Errors
/// Returns `CatalogError::NotFound` (wrapped) if no icon has that name
pub fn execute<W: Write>(catalog: &IconCatalog, name: &str, out: &mut W) -> Result<()> {
    let icon = catalog.require(name)?;
    writeln!(out, "{}", output::icon_details(icon))?;
    Ok(())
}
