//! Annotated lines of a text diff.

use serde::{Deserialize, Serialize};

use crate::word::WordChange;

/// Classification of a [`DiffLine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineKind {
    Unchanged,
    Added,
    Removed,
}

/// A single line in a text diff.
///
/// # Invariants
///
/// - `Unchanged` lines carry both line numbers and no word changes.
/// - `Removed` lines carry only `before_line_number`.
/// - `Added` lines carry only `after_line_number`.
/// - Line numbers are 1-based and strictly increasing within each track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    #[serde(rename = "type")]
    pub kind: DiffLineKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_changes: Option<Vec<WordChange>>,
}

impl DiffLine {
    /// A line present on both sides.
    pub fn unchanged(content: impl Into<String>, before: usize, after: usize) -> Self {
        Self {
            kind: DiffLineKind::Unchanged,
            content: content.into(),
            before_line_number: Some(before),
            after_line_number: Some(after),
            word_changes: None,
        }
    }

    /// A line present only on the before side.
    pub fn removed(content: impl Into<String>, before: usize) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            content: content.into(),
            before_line_number: Some(before),
            after_line_number: None,
            word_changes: None,
        }
    }

    /// A line present only on the after side.
    pub fn added(content: impl Into<String>, after: usize) -> Self {
        Self {
            kind: DiffLineKind::Added,
            content: content.into(),
            before_line_number: None,
            after_line_number: Some(after),
            word_changes: None,
        }
    }

    /// Attach word-level changes (used for modification blocks).
    pub fn with_word_changes(mut self, changes: Vec<WordChange>) -> Self {
        self.word_changes = Some(changes);
        self
    }

    /// Returns `true` unless the line is `Unchanged`.
    pub fn is_change(&self) -> bool {
        self.kind != DiffLineKind::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_number_tracks() {
        let u = DiffLine::unchanged("a", 1, 2);
        assert_eq!((u.before_line_number, u.after_line_number), (Some(1), Some(2)));
        assert!(!u.is_change());

        let r = DiffLine::removed("a", 3);
        assert_eq!((r.before_line_number, r.after_line_number), (Some(3), None));

        let a = DiffLine::added("a", 4);
        assert_eq!((a.before_line_number, a.after_line_number), (None, Some(4)));
        assert!(a.is_change());
    }

    #[test]
    fn json_uses_type_and_camel_case() {
        let line = DiffLine::removed("old", 7).with_word_changes(vec![WordChange::removed("old")]);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["type"], "removed");
        assert_eq!(json["beforeLineNumber"], 7);
        assert!(json.get("afterLineNumber").is_none());
        assert_eq!(json["wordChanges"][0]["value"], "old");
    }
}
