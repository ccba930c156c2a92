//! Cell-level diff results for delimited (CSV) content.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::word::WordChange;

/// One parsed CSV record: an ordered sequence of cell values.
pub type CsvRow = Vec<String>;

/// The comparison of a single cell position.
///
/// `has_change` is `true` iff `before != after`; `word_changes` is empty
/// when there is no change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffCell {
    pub before: String,
    pub after: String,
    pub has_change: bool,
    pub word_changes: Vec<WordChange>,
}

impl DiffCell {
    /// A cell whose value is the same on both sides.
    pub fn unchanged(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            before: value.clone(),
            after: value,
            has_change: false,
            word_changes: Vec::new(),
        }
    }

    /// A cell whose value differs between the two sides.
    pub fn changed(
        before: impl Into<String>,
        after: impl Into<String>,
        word_changes: Vec<WordChange>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            has_change: true,
            word_changes,
        }
    }
}

/// A compared row of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRow {
    /// 1-based row number, offset by one when a header row was consumed.
    pub row_number: usize,
    pub cells: Vec<DiffCell>,
    pub has_changes: bool,
}

impl DiffRow {
    /// Build a row, deriving `has_changes` from its cells.
    pub fn new(row_number: usize, cells: Vec<DiffCell>) -> Self {
        let has_changes = cells.iter().any(|c| c.has_change);
        Self {
            row_number,
            cells,
            has_changes,
        }
    }

    /// Number of cells that differ.
    pub fn changed_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.has_change).count()
    }
}

/// The result of diffing two CSV documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffTable {
    /// Display labels, already expanded into before/after pairs when the
    /// before/after column mode is on.
    pub headers: Vec<String>,
    pub rows: Vec<DiffRow>,
    /// Column indices where at least one row has a changed cell. Only
    /// populated in before/after column mode.
    #[serde(default)]
    pub changed_columns: BTreeSet<usize>,
}

impl DiffTable {
    /// Returns `true` if no row carries a change.
    pub fn is_unchanged(&self) -> bool {
        self.rows.iter().all(|r| !r.has_changes)
    }

    /// Returns `true` if column `index` is shown as a before/after pair.
    pub fn is_split_column(&self, index: usize) -> bool {
        self.changed_columns.contains(&index)
    }
}
