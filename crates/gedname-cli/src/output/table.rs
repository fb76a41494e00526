//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// One placeholder row of the `keys` listing.
#[derive(Serialize)]
pub struct KeyRow {
    /// Domain name (e.g. "date").
    pub domain: &'static str,
    /// Placeholder name (e.g. "YY").
    pub placeholder: &'static str,
    /// Field key the placeholder reads (e.g. "year").
    pub field: &'static str,
    /// Formatting applied before modifiers.
    pub format: &'static str,
}

/// Format placeholder rows as an ASCII table.
pub fn format_keys_table(rows: &[KeyRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Domain", "Placeholder", "Field", "Format"]);

    for row in rows {
        table.add_row(vec![
            row.domain.to_string(),
            format!("{{{}}}", row.placeholder),
            row.field.to_string(),
            row.format.to_string(),
        ]);
    }

    table
}
