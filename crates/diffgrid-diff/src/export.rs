//! Serializing diff results back to text.

use diffgrid_types::{DiffConfig, DiffLine, DiffLineKind, DiffTable};

/// Quote one field, doubling any embedded quotes.
pub fn quote_csv_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Re-serialize a table diff as quoted CSV.
///
/// One line for the headers (when present) and one per row, no trailing
/// newline. In before/after column mode a changed column contributes its
/// before and after values; every other column contributes the after value.
pub fn export_diff_table_to_csv(table: &DiffTable, config: &DiffConfig) -> String {
    let separator = config.delimiter.to_string();
    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    if !table.headers.is_empty() {
        lines.push(join_fields(table.headers.iter().map(String::as_str), &separator));
    }

    for row in &table.rows {
        let fields = row.cells.iter().enumerate().flat_map(|(j, cell)| {
            if config.before_after_column && table.is_split_column(j) {
                vec![cell.before.as_str(), cell.after.as_str()]
            } else {
                vec![cell.after.as_str()]
            }
        });
        lines.push(join_fields(fields, &separator));
    }

    lines.join("\n")
}

fn join_fields<'a>(fields: impl Iterator<Item = &'a str>, separator: &str) -> String {
    fields.map(quote_csv_field).collect::<Vec<_>>().join(separator)
}

/// Render a line diff with `+`, `-`, and space prefixes.
pub fn export_diff_lines_to_text(lines: &[DiffLine]) -> String {
    lines
        .iter()
        .map(|line| {
            let prefix = match line.kind {
                DiffLineKind::Added => '+',
                DiffLineKind::Removed => '-',
                DiffLineKind::Unchanged => ' ',
            };
            format!("{prefix}{}", line.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
