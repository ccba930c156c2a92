//! Table diff: cell-by-cell comparison of two CSV documents.
//!
//! Rows are compared by position, not aligned by content: row N of the
//! before side is always compared with row N of the after side. Inserting a
//! row near the top therefore shows every following row as changed.
//!
//! # Headers
//!
//! With `first_row_is_header`, labels come from the after side's first row
//! (the before side's when the after side has none). Otherwise labels are
//! synthesized as `Column N`. In before/after column mode every column that
//! ever changes is shown as `<label> Before` followed by `<label> After`.

use std::collections::BTreeSet;

use diffgrid_types::{CsvRow, DiffCell, DiffConfig, DiffRow, DiffTable};
use tracing::debug;

use crate::parse::{parse_csv_to_rows, strip_formatting_quotes};
use crate::words::compute_cell_word_changes;

/// Compare two rows cell by cell. Missing cells compare as empty strings.
pub fn create_diff_cells(before: &[String], after: &[String], delimiter: char) -> Vec<DiffCell> {
    let width = before.len().max(after.len());
    (0..width)
        .map(|j| {
            let b = cell_value(before, j, delimiter);
            let a = cell_value(after, j, delimiter);
            let (before_text, after_text) = (b.unwrap_or_default(), a.unwrap_or_default());
            if before_text == after_text {
                DiffCell::unchanged(after_text)
            } else {
                DiffCell::changed(before_text, after_text, compute_cell_word_changes(b, a))
            }
        })
        .collect()
}

fn cell_value(row: &[String], index: usize, delimiter: char) -> Option<&str> {
    row.get(index).map(|v| strip_formatting_quotes(v, delimiter))
}

/// Parse and diff two CSV documents.
pub fn create_csv_diff_table(before_text: &str, after_text: &str, config: &DiffConfig) -> DiffTable {
    let delimiter = config.delimiter;
    let before_rows = parse_csv_to_rows(before_text, delimiter);
    let after_rows = parse_csv_to_rows(after_text, delimiter);

    let labels = if config.first_row_is_header {
        extract_header(&before_rows, &after_rows, delimiter)
    } else {
        None
    };

    let (before_data, after_data, offset) = match labels {
        Some(_) => (data_rows(&before_rows), data_rows(&after_rows), 1),
        None => (&before_rows[..], &after_rows[..], 0),
    };

    let split_mode = config.before_after_column;
    let mut rows = Vec::new();
    let mut changed_columns = BTreeSet::new();
    let mut column_count = 0;

    for i in 0..before_data.len().max(after_data.len()) {
        let before = before_data.get(i).map(Vec::as_slice).unwrap_or_default();
        let after = after_data.get(i).map(Vec::as_slice).unwrap_or_default();
        if before.is_empty() && after.is_empty() {
            continue;
        }

        let row = DiffRow::new(i + 1 + offset, create_diff_cells(before, after, delimiter));
        column_count = column_count.max(row.cells.len());
        if split_mode {
            changed_columns.extend(
                row.cells
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.has_change)
                    .map(|(j, _)| j),
            );
        }

        if config.hide_unchanged_rows && !row.has_changes {
            continue;
        }
        rows.push(row);
    }

    let headers = build_headers(labels.as_deref(), column_count, &changed_columns);
    debug!(
        before_rows = before_data.len(),
        after_rows = after_data.len(),
        emitted = rows.len(),
        changed_columns = changed_columns.len(),
        "built csv diff table"
    );

    DiffTable {
        headers,
        rows,
        changed_columns,
    }
}

/// Header labels from the after side's first row, or the before side's.
fn extract_header(before: &[CsvRow], after: &[CsvRow], delimiter: char) -> Option<Vec<String>> {
    let first = after
        .first()
        .filter(|row| !row.is_empty())
        .or_else(|| before.first())?;
    Some(
        first
            .iter()
            .map(|label| strip_formatting_quotes(label, delimiter).to_string())
            .collect(),
    )
}

/// Rows after the header. A side holding only the header has no data.
fn data_rows(rows: &[CsvRow]) -> &[CsvRow] {
    rows.get(1..).unwrap_or_default()
}

fn build_headers(
    labels: Option<&[String]>,
    column_count: usize,
    changed_columns: &BTreeSet<usize>,
) -> Vec<String> {
    let labels = labels.unwrap_or_default();
    let width = column_count.max(labels.len());

    let mut headers = Vec::with_capacity(width + changed_columns.len());
    for j in 0..width {
        let label = labels
            .get(j)
            .cloned()
            .unwrap_or_else(|| format!("Column {}", j + 1));
        if changed_columns.contains(&j) {
            headers.push(format!("{label} Before"));
            headers.push(format!("{label} After"));
        } else {
            headers.push(label);
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use diffgrid_types::WordChange;

    fn header_config() -> DiffConfig {
        DiffConfig::csv().with_first_row_is_header(true)
    }

    #[test]
    fn header_row_and_changed_cell() {
        let table = create_csv_diff_table("a,b\n1,2", "a,b\n1,changed", &header_config());
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert!(row.has_changes);
        assert_eq!(row.row_number, 2);
        assert!(!row.cells[0].has_change);
        assert_eq!(row.cells[1].before, "2");
        assert_eq!(row.cells[1].after, "changed");
        assert_eq!(
            row.cells[1].word_changes,
            vec![WordChange::removed("2"), WordChange::added("changed")]
        );
        assert!(table.changed_columns.is_empty());
    }

    #[test]
    fn synthesized_headers_without_header_row() {
        let table = create_csv_diff_table("1,2,3\n4,5", "1,2,3\n4,5", &DiffConfig::csv());
        assert_eq!(table.headers, vec!["Column 1", "Column 2", "Column 3"]);
        assert_eq!(table.rows[0].row_number, 1);
        assert_eq!(table.rows[1].row_number, 2);
        assert!(table.is_unchanged());
    }

    #[test]
    fn before_after_columns_with_header() {
        let config = header_config().with_before_after_column(true);
        let table = create_csv_diff_table(
            "Name,Value\nalice,1\nbob,2",
            "Name,Value\nalice,10\nbob,2",
            &config,
        );
        assert_eq!(table.headers, vec!["Name", "Value Before", "Value After"]);
        assert_eq!(table.changed_columns, [1].into_iter().collect());
    }

    #[test]
    fn before_after_columns_synthesized() {
        let config = DiffConfig::csv().with_before_after_column(true);
        let table = create_csv_diff_table("x,1", "y,1", &config);
        assert_eq!(table.headers, vec!["Column 1 Before", "Column 1 After", "Column 2"]);
    }

    #[test]
    fn hide_unchanged_rows_keeps_row_numbers() {
        let config = header_config().with_hide_unchanged_rows(true);
        let table = create_csv_diff_table("h\na\nb\nc", "h\na\nB\nc", &config);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].row_number, 3);
    }

    #[test]
    fn mismatched_row_lengths_pad_with_empty() {
        let table = create_csv_diff_table("a,b", "a,b,c", &DiffConfig::csv());
        let cells = &table.rows[0].cells;
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[2].before, "");
        assert_eq!(cells[2].after, "c");
        assert!(cells[2].has_change);
    }

    #[test]
    fn missing_cell_word_changes_are_pure_additions() {
        let cells = create_diff_cells(&["a".to_string()], &["a".to_string(), "new cell".to_string()], ',');
        assert_eq!(cells[1].word_changes, vec![WordChange::added("new cell")]);
        assert_eq!(cells[1].before, "");
    }

    #[test]
    fn rows_compared_by_position() {
        let table = create_csv_diff_table("a\nb", "new\na\nb", &DiffConfig::csv());
        assert_eq!(table.rows.len(), 3);
        assert!(table.rows.iter().all(|r| r.has_changes));
        assert_eq!(table.rows[2].cells[0].before, "");
        assert_eq!(table.rows[2].cells[0].after, "b");
    }

    #[test]
    fn header_only_side_has_no_data() {
        let table = create_csv_diff_table("a,b", "a,b\n1,2", &header_config());
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells[0].before, "");
        assert_eq!(table.rows[0].cells[0].after, "1");
    }

    #[test]
    fn header_falls_back_to_before_side() {
        let table = create_csv_diff_table("x,y\n1,2", "", &header_config());
        assert_eq!(table.headers, vec!["x", "y"]);
        assert_eq!(table.rows[0].cells[1].before, "2");
        assert_eq!(table.rows[0].cells[1].after, "");
    }

    #[test]
    fn blank_rows_on_both_sides_are_skipped() {
        let table = create_csv_diff_table("a\n\nb", "a\n\nb", &DiffConfig::csv());
        let numbers: Vec<usize> = table.rows.iter().map(|r| r.row_number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn formatting_quotes_do_not_count_as_changes() {
        let table = create_csv_diff_table("\"a\",b", "a,\"b\"", &DiffConfig::csv());
        assert!(table.is_unchanged());
    }

    #[test]
    fn quoted_header_labels_are_stripped() {
        let table = create_csv_diff_table("\"\"\"id\"\"\",v\n1,2", "\"\"\"id\"\"\",v\n1,2", &header_config());
        assert_eq!(table.headers, vec!["id", "v"]);
    }

    #[test]
    fn empty_inputs() {
        let table = create_csv_diff_table("", "", &DiffConfig::csv());
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
    }
}
