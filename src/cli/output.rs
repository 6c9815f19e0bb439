//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

/// Result of a command, printable for people or as JSON
pub trait CommandOutput: Serialize {
    /// Text shown without `--json`
    fn to_human(&self) -> String;
    /// Value printed with `--json`
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Two-column field/value table without borders.
pub fn field_table<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["FIELD", "VALUE"].map(|h| Cell::new(h).set_alignment(CellAlignment::Left)));
    for (field, value) in rows {
        table.add_row([Cell::new(field), Cell::new(value)]);
    }
    table
}
