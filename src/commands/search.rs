//! Search command - fuzzy search the icon catalog

use crate::{
    IconrError,
    cli::{OutputFormat, SearchArgs},
    config::IconrConfig,
    icons::IconCatalog,
    output,
    search::{self, SearchHit},
};
use std::io::Write;

type Result<T> = std::result::Result<T, IconrError>;

/// Execute the search command
///
/// # Errors
/// Returns an error if writing the results or serializing them fails
pub fn execute<W: Write>(
    catalog: &IconCatalog,
    args: &SearchArgs,
    config: &IconrConfig,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    let query = args.to_query_state(config);
    tracing::debug!(
        text = query.text.as_str(),
        categories = ?query.categories,
        sort = %query.sort,
        limit = ?query.limit,
        "running search"
    );

    let hits = search::rank(catalog.records(), &query, &config.scoring);
    tracing::debug!(results = hits.len(), "search finished");

    match args.format {
        OutputFormat::Json => write_json(&hits, out),
        OutputFormat::Text => {
            let aliases = search::matched_aliases(hits.iter().map(|hit| hit.icon), &query.text);

            if hits.is_empty() {
                if !quiet {
                    writeln!(out, "No icons found.")?;
                }
                return Ok(());
            }

            if !quiet {
                writeln!(out, "Found {} icon(s) ({}):", hits.len(), query.sort.label())?;
            }
            for hit in &hits {
                let alias = aliases.get(hit.icon.name.as_str()).copied();
                writeln!(out, "{}", output::search_hit(hit, alias, args.scores, quiet))?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write>(hits: &[SearchHit<'_>], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, hits)?;
    writeln!(out)?;
    Ok(())
}
