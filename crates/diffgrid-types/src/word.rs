//! Word-level change fragments.

use serde::{Deserialize, Serialize};

/// A maximal run of text tagged as common, added, or removed relative to a
/// before/after string pair.
///
/// `added` and `removed` are never both `true`. Concatenating the `value`s of
/// all fragments that are not `removed` yields the after string; the ones
/// that are not `added` yield the before string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordChange {
    pub value: String,
    pub added: bool,
    pub removed: bool,
}

impl WordChange {
    /// A fragment present on both sides.
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: false,
        }
    }

    /// A fragment present only on the after side.
    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: true,
            removed: false,
        }
    }

    /// A fragment present only on the before side.
    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            added: false,
            removed: true,
        }
    }

    /// Returns `true` if the fragment is common to both sides.
    pub fn is_unchanged(&self) -> bool {
        !self.added && !self.removed
    }

    /// Rebuild the before string from a fragment sequence.
    pub fn reconstruct_before(changes: &[WordChange]) -> String {
        changes
            .iter()
            .filter(|c| !c.added)
            .map(|c| c.value.as_str())
            .collect()
    }

    /// Rebuild the after string from a fragment sequence.
    pub fn reconstruct_after(changes: &[WordChange]) -> String {
        changes
            .iter()
            .filter(|c| !c.removed)
            .map(|c| c.value.as_str())
            .collect()
    }
}
