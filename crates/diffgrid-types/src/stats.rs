//! Summary counts over diff results.

use serde::{Deserialize, Serialize};

use crate::line::{DiffLine, DiffLineKind};
use crate::table::DiffTable;

/// Aggregate counts for a rendered diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    /// Rows with at least one changed cell (CSV only).
    pub changed_rows: usize,
    /// Changed cells across all rows (CSV only).
    pub changed_cells: usize,
}

impl DiffStats {
    /// Count line kinds in a text diff. Hidden lines are not counted.
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind {
                DiffLineKind::Added => stats.added += 1,
                DiffLineKind::Removed => stats.removed += 1,
                DiffLineKind::Unchanged => stats.unchanged += 1,
            }
        }
        stats
    }

    /// Count changed rows and cells in a table diff.
    pub fn from_table(table: &DiffTable) -> Self {
        let mut stats = Self::default();
        for row in &table.rows {
            if row.has_changes {
                stats.changed_rows += 1;
                stats.changed_cells += row.changed_cells();
            } else {
                stats.unchanged += 1;
            }
        }
        stats
    }

    /// Returns `true` if nothing changed.
    pub fn is_clean(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.changed_rows == 0
    }
}
