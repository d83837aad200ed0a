//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use super::colors::{Paint, Tone};

/// Rows shown before the preview is truncated.
pub const PREVIEW_ROWS: usize = 20;

/// Creates a styled table for row previews.
///
/// `highlight` is the index of a column to color (the sort column).
pub fn rows_table(columns: &[String], rows: &[Vec<String>], highlight: Option<usize>) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            if !super::colors::enabled() {
                Cell::new(col)
            } else if Some(i) == highlight {
                Cell::new(col).add_attribute(Attribute::Bold).fg(Color::Green)
            } else {
                Cell::new(col).add_attribute(Attribute::Bold).fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Prints up to [`PREVIEW_ROWS`] rows as a formatted table.
pub fn print_rows_preview(columns: &[String], rows: &[Vec<String>], highlight: Option<usize>) {
    let shown = &rows[..rows.len().min(PREVIEW_ROWS)];
    println!("{}", rows_table(columns, shown, highlight));

    let count = rows.len();
    let row_word = if count == 1 { "row" } else { "rows" };
    if count > shown.len() {
        println!(
            "{}",
            format!("({} of {count} {row_word} shown)", shown.len()).paint(Tone::Quiet)
        );
    } else {
        println!("{}", format!("({count} {row_word})").paint(Tone::Quiet));
    }
}

/// Creates a key-value info table (two columns: key and value).
pub fn info_table(entries: &[(&str, String)]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (key, value) in entries {
        let key_cell = if !super::colors::enabled() {
            Cell::new(key)
        } else {
            Cell::new(key).fg(Color::DarkGrey)
        };
        table.add_row(vec![key_cell, Cell::new(value)]);
    }

    table
}
