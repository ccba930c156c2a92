//! Word-level change fragments between two strings.
//!
//! Strings are split into tokens (runs of word characters, runs of
//! whitespace, and single punctuation characters) and the token sequences are
//! aligned with [`align_sequences`]. Adjacent tokens of the same kind are
//! merged into one [`WordChange`].

use diffgrid_types::WordChange;

use crate::align::{align_sequences, Run};

/// Split a string into word, whitespace, and punctuation tokens.
///
/// Concatenating the tokens reproduces the input.
pub fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenClass> = None;

    for (i, ch) in s.char_indices() {
        let class = TokenClass::of(ch);
        match current {
            Some(prev) if prev == class && class != TokenClass::Punct => {}
            Some(_) => {
                tokens.push(&s[start..i]);
                start = i;
            }
            None => {}
        }
        current = Some(class);
    }
    if start < s.len() {
        tokens.push(&s[start..]);
    }

    tokens
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Word,
    Space,
    Punct,
}

impl TokenClass {
    fn of(ch: char) -> Self {
        if ch.is_alphanumeric() || ch == '_' {
            TokenClass::Word
        } else if ch.is_whitespace() {
            TokenClass::Space
        } else {
            TokenClass::Punct
        }
    }
}

/// Compute word-level fragments between `before` and `after`.
///
/// Identical inputs produce one unchanged fragment holding the whole string
/// (even when it is empty).
pub fn compute_word_changes(before: &str, after: &str) -> Vec<WordChange> {
    if before == after {
        return vec![WordChange::unchanged(before)];
    }

    let before_tokens = tokenize(before);
    let after_tokens = tokenize(after);

    let mut changes: Vec<WordChange> = Vec::new();
    for run in align_sequences(&before_tokens, &after_tokens) {
        let value: String = run.items().concat();
        let change = match run {
            Run::Kept(_) => WordChange::unchanged(value),
            Run::Removed(_) => WordChange::removed(value),
            Run::Added(_) => WordChange::added(value),
        };
        push_merged(&mut changes, change);
    }

    changes
}

/// Word changes for one CSV cell; a missing cell compares as empty.
pub fn compute_cell_word_changes(before: Option<&str>, after: Option<&str>) -> Vec<WordChange> {
    compute_word_changes(before.unwrap_or_default(), after.unwrap_or_default())
}

fn push_merged(changes: &mut Vec<WordChange>, change: WordChange) {
    match changes.last_mut() {
        Some(last) if last.added == change.added && last.removed == change.removed => {
            last.value.push_str(&change.value);
        }
        _ => changes.push(change),
    }
}
