//! Foundation types for diffgrid.
//!
//! Every value here is a pure computation output or an immutable input
//! setting. The diff engine (`diffgrid-diff`) produces these types and the
//! renderers consume them.
//!
//! # Key Types
//!
//! - [`WordChange`] -- A word-level fragment tagged as common, added, or removed
//! - [`DiffLine`] / [`DiffLineKind`] -- One annotated line of a text diff
//! - [`CsvRow`] / [`DiffCell`] / [`DiffRow`] / [`DiffTable`] -- Cell-level CSV diff
//! - [`DiffConfig`] / [`DiffMode`] -- Per-computation settings
//! - [`DiffOutput`] -- Text-mode lines or CSV-mode table
//! - [`DiffStats`] -- Summary counts over a diff result

pub mod config;
pub mod error;
pub mod line;
pub mod output;
pub mod stats;
pub mod table;
pub mod word;

pub use config::{DiffConfig, DiffMode, DEFAULT_LCS_CELL_LIMIT};
pub use error::{DiffError, DiffResult};
pub use line::{DiffLine, DiffLineKind};
pub use output::DiffOutput;
pub use stats::DiffStats;
pub use table::{CsvRow, DiffCell, DiffRow, DiffTable};
pub use word::WordChange;
