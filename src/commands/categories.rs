//! Categories command - list the category vocabulary

use crate::{IconrError, icons::IconCatalog, output};
use std::io::Write;

type Result<T> = std::result::Result<T, IconrError>;

/// Execute the categories command
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn execute<W: Write>(catalog: &IconCatalog, quiet: bool, out: &mut W) -> Result<()> {
    let counts = catalog.category_counts();

    if counts.is_empty() {
        if !quiet {
            writeln!(out, "No categories found.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Categories ({}):", counts.len())?;
    }
    for (category, count) in counts {
        writeln!(out, "{}", output::category_with_count(category, count, quiet))?;
    }
    Ok(())
}
