//! Generic sequence alignment: split two sequences into kept, removed, and
//! added runs.
//!
//! Uses the `similar` crate's LCS algorithm. Its table costs memory
//! proportional to `before.len() * after.len()` (roughly 40 bytes per cell),
//! so above the configured cell bound Myers' linear-space algorithm is used
//! instead. Both yield a minimal edit script; only the choice among equally
//! minimal alignments can differ. Myers still takes time proportional to the
//! input size times the edit distance, so two large, mostly disjoint inputs
//! remain slow.
//!
//! # Invariants
//!
//! - Concatenating `Kept` and `Removed` runs in order reconstructs `before`.
//! - Concatenating `Kept` and `Added` runs in order reconstructs `after`.
//! - Runs are never empty, and between two `Kept` runs there is at most one
//!   `Removed` run followed by at most one `Added` run.

use std::hash::Hash;
use std::ops::Range;

use diffgrid_types::DEFAULT_LCS_CELL_LIMIT;
use similar::{capture_diff_slices, Algorithm, DiffTag};
use tracing::debug;

/// A contiguous run of aligned elements.
#[derive(Debug, PartialEq, Eq)]
pub enum Run<'a, T> {
    /// Elements present on both sides (borrowed from `before`).
    Kept(&'a [T]),
    /// Elements present only in `before`.
    Removed(&'a [T]),
    /// Elements present only in `after`.
    Added(&'a [T]),
}

impl<'a, T> Run<'a, T> {
    /// The elements covered by this run.
    pub fn items(&self) -> &'a [T] {
        match *self {
            Run::Kept(items) | Run::Removed(items) | Run::Added(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Align two sequences with the default LCS cell bound.
pub fn align_sequences<'a, T>(before: &'a [T], after: &'a [T]) -> Vec<Run<'a, T>>
where
    T: Eq + Hash + Ord,
{
    align_sequences_bounded(before, after, DEFAULT_LCS_CELL_LIMIT)
}

/// Align two sequences, falling back to Myers when
/// `before.len() * after.len()` exceeds `lcs_cell_limit`.
pub fn align_sequences_bounded<'a, T>(
    before: &'a [T],
    after: &'a [T],
    lcs_cell_limit: usize,
) -> Vec<Run<'a, T>>
where
    T: Eq + Hash + Ord,
{
    let algorithm = choose_algorithm(before.len(), after.len(), lcs_cell_limit);
    let ops = capture_diff_slices(algorithm, before, after);

    let mut runs = Vec::with_capacity(ops.len());
    let mut pending = Pending::default();

    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                pending.flush_changes(&mut runs, before, after);
                if !old_range.is_empty() {
                    pending.kept = Some(extend_range(pending.kept.take(), old_range));
                }
            }
            DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                pending.flush_kept(&mut runs, before);
                if !old_range.is_empty() {
                    pending.removed = Some(extend_range(pending.removed.take(), old_range));
                }
                if !new_range.is_empty() {
                    pending.added = Some(extend_range(pending.added.take(), new_range));
                }
            }
        }
    }
    pending.flush_kept(&mut runs, before);
    pending.flush_changes(&mut runs, before, after);

    runs
}

/// LCS while the table fits in `lcs_cell_limit` cells, Myers beyond it.
pub fn choose_algorithm(before_len: usize, after_len: usize, lcs_cell_limit: usize) -> Algorithm {
    if before_len.saturating_mul(after_len) > lcs_cell_limit {
        debug!(
            before = before_len,
            after = after_len,
            limit = lcs_cell_limit,
            "LCS table too large, aligning with Myers"
        );
        Algorithm::Myers
    } else {
        Algorithm::Lcs
    }
}

/// Ranges accumulated since the last emitted run.
#[derive(Default)]
struct Pending {
    kept: Option<Range<usize>>,
    removed: Option<Range<usize>>,
    added: Option<Range<usize>>,
}

impl Pending {
    fn flush_kept<'a, T>(&mut self, runs: &mut Vec<Run<'a, T>>, before: &'a [T]) {
        if let Some(range) = self.kept.take() {
            runs.push(Run::Kept(&before[range]));
        }
    }

    fn flush_changes<'a, T>(&mut self, runs: &mut Vec<Run<'a, T>>, before: &'a [T], after: &'a [T]) {
        if let Some(range) = self.removed.take() {
            runs.push(Run::Removed(&before[range]));
        }
        if let Some(range) = self.added.take() {
            runs.push(Run::Added(&after[range]));
        }
    }
}

fn extend_range(current: Option<Range<usize>>, next: Range<usize>) -> Range<usize> {
    match current {
        Some(r) => r.start.min(next.start)..r.end.max(next.end),
        None => next,
    }
}
