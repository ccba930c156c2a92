//! Diff engine for diffgrid.
//!
//! Turns two versions of text or CSV content into structured,
//! renderer-agnostic results: annotated lines with word-level changes, or a
//! table of per-cell diffs. Every function here is pure and total.
//!
//! # Pipeline
//!
//! raw text → [`parse`] → [`align`] → [`lines`] or [`table`] (using
//! [`words`]) → result → optionally [`export`].

pub mod align;
pub mod export;
pub mod lines;
pub mod parse;
pub mod table;
pub mod words;

pub use align::{align_sequences, align_sequences_bounded, Run};
pub use export::{export_diff_lines_to_text, export_diff_table_to_csv, quote_csv_field};
pub use lines::create_diff_lines;
pub use parse::{parse_csv_line, parse_csv_to_rows, parse_text_to_lines, strip_formatting_quotes};
pub use table::{create_csv_diff_table, create_diff_cells};
pub use words::{compute_cell_word_changes, compute_word_changes};

use diffgrid_types::{DiffConfig, DiffMode, DiffOutput};

/// Diff two texts with the builder selected by `config.mode`.
pub fn diff_texts(before: &str, after: &str, config: &DiffConfig) -> DiffOutput {
    match config.mode {
        DiffMode::Text => DiffOutput::Lines(create_diff_lines(
            &parse_text_to_lines(before),
            &parse_text_to_lines(after),
            config,
        )),
        DiffMode::Csv => DiffOutput::Table(create_csv_diff_table(before, after, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_mode() {
        let out = diff_texts("a", "b", &DiffConfig::text());
        assert!(matches!(out, DiffOutput::Lines(ref l) if l.len() == 2));

        let out = diff_texts("a", "b", &DiffConfig::csv());
        assert!(matches!(out, DiffOutput::Table(ref t) if t.rows.len() == 1));
    }

    #[test]
    fn identical_calls_are_equal() {
        let config = DiffConfig::csv().with_before_after_column(true);
        let a = diff_texts("x,y\n1,2", "x,z\n1,3", &config);
        let b = diff_texts("x,y\n1,2", "x,z\n1,3", &config);
        assert_eq!(a, b);
    }
}
