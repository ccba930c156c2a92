//! Per-computation diff settings.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Default bound on `before.len() * after.len()` for the quadratic LCS table.
///
/// The LCS table costs about 40 bytes per cell, so the default caps it near
/// 40 MB (1000 x 1000 lines).
pub const DEFAULT_LCS_CELL_LIMIT: usize = 1_000_000;

/// Which builder runs over the input texts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    #[default]
    Text,
    Csv,
}

/// Immutable settings for one diff computation.
///
/// Passed explicitly into every builder; nothing in the pipeline reads
/// process-wide state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffConfig {
    pub mode: DiffMode,
    /// Suppress unchanged lines/rows from output. Line counters still advance.
    pub hide_unchanged_rows: bool,
    /// CSV only: show two columns for any column that ever differs.
    pub before_after_column: bool,
    /// CSV only: treat each side's first row as column labels.
    pub first_row_is_header: bool,
    /// CSV field separator.
    pub delimiter: char,
    /// Above this many LCS table cells the aligner switches to Myers.
    pub lcs_cell_limit: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            mode: DiffMode::Text,
            hide_unchanged_rows: false,
            before_after_column: false,
            first_row_is_header: false,
            delimiter: ',',
            lcs_cell_limit: DEFAULT_LCS_CELL_LIMIT,
        }
    }
}

impl DiffConfig {
    /// Default settings for line diffing.
    pub fn text() -> Self {
        Self::default()
    }

    /// Default settings for CSV diffing.
    pub fn csv() -> Self {
        Self {
            mode: DiffMode::Csv,
            ..Default::default()
        }
    }

    pub fn with_hide_unchanged_rows(mut self, hide: bool) -> Self {
        self.hide_unchanged_rows = hide;
        self
    }

    pub fn with_before_after_column(mut self, split: bool) -> Self {
        self.before_after_column = split;
        self
    }

    pub fn with_first_row_is_header(mut self, header: bool) -> Self {
        self.first_row_is_header = header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_lcs_cell_limit(mut self, limit: usize) -> Self {
        self.lcs_cell_limit = limit;
        self
    }

    /// Reject settings the CSV parser cannot honor.
    pub fn validate(&self) -> DiffResult<()> {
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(DiffError::InvalidDelimiter(self.delimiter));
        }
        Ok(())
    }

    /// Parse a TOML document into a validated configuration.
    ///
    /// Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| DiffError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = DiffConfig::default();
        assert_eq!(c.mode, DiffMode::Text);
        assert!(!c.hide_unchanged_rows);
        assert!(!c.before_after_column);
        assert!(!c.first_row_is_header);
        assert_eq!(c.delimiter, ',');
        assert_eq!(c.lcs_cell_limit, DEFAULT_LCS_CELL_LIMIT);
    }

    #[test]
    fn builders() {
        let c = DiffConfig::csv()
            .with_first_row_is_header(true)
            .with_before_after_column(true)
            .with_delimiter(';');
        assert_eq!(c.mode, DiffMode::Csv);
        assert!(c.first_row_is_header);
        assert!(c.before_after_column);
        assert_eq!(c.delimiter, ';');
    }

    #[test]
    fn quote_delimiter_rejected() {
        let c = DiffConfig::csv().with_delimiter('"');
        assert_eq!(c.validate(), Err(DiffError::InvalidDelimiter('"')));
        assert!(DiffConfig::csv().with_delimiter('\n').validate().is_err());
        assert!(DiffConfig::csv().with_delimiter('\t').validate().is_ok());
    }

    #[test]
    fn from_toml_partial() {
        let c = DiffConfig::from_toml_str(
            r#"
            mode = "csv"
            firstRowIsHeader = true
            delimiter = ";"
            "#,
        )
        .unwrap();
        assert_eq!(c.mode, DiffMode::Csv);
        assert!(c.first_row_is_header);
        assert!(!c.hide_unchanged_rows);
        assert_eq!(c.delimiter, ';');
    }

    #[test]
    fn from_toml_rejects_bad_input() {
        assert!(matches!(
            DiffConfig::from_toml_str("mode = \"xml\""),
            Err(DiffError::InvalidConfig(_))
        ));
        assert_eq!(
            DiffConfig::from_toml_str("delimiter = '\"'"),
            Err(DiffError::InvalidDelimiter('"'))
        );
    }
}
