//! Mode-dependent diff results.

use serde::{Deserialize, Serialize};

use crate::line::DiffLine;
use crate::stats::DiffStats;
use crate::table::DiffTable;

/// What a diff produced: annotated lines in text mode, a table in CSV mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "result", rename_all = "lowercase")]
pub enum DiffOutput {
    #[serde(rename = "text")]
    Lines(Vec<DiffLine>),
    #[serde(rename = "csv")]
    Table(DiffTable),
}

impl DiffOutput {
    /// Summary counts for either shape.
    pub fn stats(&self) -> DiffStats {
        match self {
            DiffOutput::Lines(lines) => DiffStats::from_lines(lines),
            DiffOutput::Table(table) => DiffStats::from_table(table),
        }
    }
}
