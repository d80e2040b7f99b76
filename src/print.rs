//! Plain-text and JSON rendering of a [`TableModel`] for the command line.

use serde::Serialize;

use crate::table::TableModel;

/// Render the table as left-aligned columns separated by two spaces.
///
/// The first line holds the column names; absent cells are blank.
pub fn render_text_table(table: &TableModel) -> String {
    let headers: Vec<&str> = table.headers().collect();
    if headers.is_empty() {
        return String::new();
    }
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in 0..table.row_count() {
        for (col, w) in widths.iter_mut().enumerate() {
            let len = table
                .value_at_index(row, col)
                .map(|v| v.chars().count())
                .unwrap_or(0);
            *w = (*w).max(len);
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, headers.iter().copied());
    for row in 0..table.row_count() {
        push_line(
            &mut out,
            &widths,
            (0..headers.len()).map(|col| table.value_at_index(row, col).unwrap_or("")),
        );
    }
    out
}

fn push_line<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[derive(Serialize)]
struct JsonTable<'a> {
    columns: Vec<&'a str>,
    rows: &'a [crate::model::Record],
}

/// Render the table as pretty JSON: `{ "columns": [...], "rows": [...] }`.
pub fn render_json(table: &TableModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonTable {
        columns: table.headers().collect(),
        rows: table.records(),
    })
}
