//! Error types for diffgrid configuration.

use thiserror::Error;

/// Errors produced while building or validating a [`DiffConfig`].
///
/// The diff pipeline itself is total; only configuration can be rejected.
///
/// [`DiffConfig`]: crate::DiffConfig
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// The delimiter collides with CSV quoting or record separators.
    #[error("invalid delimiter {0:?}: must not be a double quote or line break")]
    InvalidDelimiter(char),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for configuration results.
pub type DiffResult<T> = Result<T, DiffError>;
