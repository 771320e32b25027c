//! Output formatting for CLI display
//!
//! This module provides helpers for presenting icons and categories,
//! including the human friendly forms of hyphenated names.

use crate::icons::IconRecord;
use crate::search::SearchHit;
use colored::Colorize;

/// Icon name with hyphens shown as spaces
#[must_use]
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Category tag as a title-cased label (`dev-tools` → `Dev Tools`)
#[must_use]
pub fn category_label(category: &str) -> String {
    category
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one search result
///
/// Quiet mode prints only the name. Otherwise the first category is shown
/// with a `+N` marker for the rest, followed by the alias that explains
/// the hit and, if requested, the score.
#[must_use]
pub fn search_hit(hit: &SearchHit<'_>, matched_alias: Option<&str>, show_score: bool, quiet: bool) -> String {
    let icon = hit.icon;
    if quiet {
        return icon.name.clone();
    }

    let mut line = format!("  {}", icon.name.bold());

    if let Some(first) = icon.data.categories.first() {
        line.push_str(&format!("  {}", category_label(first).cyan()));
        if icon.data.categories.len() > 1 {
            line.push_str(&format!(" {}", format!("+{}", icon.data.categories.len() - 1).dimmed()));
        }
    }

    if let Some(alias) = matched_alias {
        line.push_str(&format!("  {}", format!("(alias: {alias})").yellow()));
    }

    if show_score && let Some(score) = hit.score {
        line.push_str(&format!("  {}", format!("{score:.3}").dimmed()));
    }

    line
}

/// Format a category with its usage count
#[must_use]
pub fn category_with_count(category: &str, count: usize, quiet: bool) -> String {
    if quiet {
        category.to_string()
    } else {
        format!("  {} {} ({count} icon(s))", category, format!("[{}]", category_label(category)).dimmed())
    }
}

/// Format a recently updated icon
#[must_use]
pub fn recent_icon(icon: &IconRecord, quiet: bool) -> String {
    if quiet {
        return icon.name.clone();
    }
    let when = icon
        .data
        .update
        .as_ref()
        .map_or("unknown", |u| u.timestamp.as_str());
    format!("  {}  {}", icon.name.bold(), when.dimmed())
}

/// Multi-line description of a single icon
#[must_use]
pub fn icon_details(icon: &IconRecord) -> String {
    let data = &icon.data;
    let mut lines = vec![
        format!("{} ({})", icon.name.bold().green(), display_name(&icon.name)),
        format!("  {:<12}{}", "Format:", data.base),
    ];

    let aliases = if data.aliases.is_empty() {
        "none".dimmed().to_string()
    } else {
        data.aliases.join(", ")
    };
    lines.push(format!("  {:<12}{aliases}", "Aliases:"));

    let categories = if data.categories.is_empty() {
        "none".dimmed().to_string()
    } else {
        data.categories
            .iter()
            .map(|c| category_label(c))
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("  {:<12}{categories}", "Categories:"));

    if let Some(colors) = &data.colors {
        if let Some(light) = &colors.light {
            lines.push(format!("  {:<12}{light}", "Light:"));
        }
        if let Some(dark) = &colors.dark {
            lines.push(format!("  {:<12}{dark}", "Dark:"));
        }
    }

    match &data.update {
        Some(update) => {
            let author = update
                .author
                .name
                .clone()
                .unwrap_or_else(|| format!("#{}", update.author.id));
            lines.push(format!("  {:<12}{} by {author}", "Updated:", update.timestamp));
        }
        None => lines.push(format!("  {:<12}{}", "Updated:", "unknown".dimmed())),
    }

    lines.join("\n")
}
