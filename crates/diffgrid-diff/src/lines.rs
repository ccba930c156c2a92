//! Line diff: annotated lines with independent before/after numbering.
//!
//! A removed run directly followed by an added run is a modification block.
//! Its lines are paired positionally and each pair carries the same
//! word-level changes on both its removed and added line.

use diffgrid_types::{DiffConfig, DiffLine};
use tracing::debug;

use crate::align::{align_sequences_bounded, Run};
use crate::words::compute_word_changes;

/// 1-based line counters for the two numbering tracks.
struct Counters {
    before: usize,
    after: usize,
}

/// Build the annotated line diff of two line sequences.
///
/// With `hide_unchanged_rows`, unchanged lines are not emitted but still
/// advance both counters.
pub fn create_diff_lines(before: &[&str], after: &[&str], config: &DiffConfig) -> Vec<DiffLine> {
    let runs = align_sequences_bounded(before, after, config.lcs_cell_limit);
    debug!(
        before = before.len(),
        after = after.len(),
        runs = runs.len(),
        "aligned lines"
    );

    let mut out = Vec::new();
    let mut counters = Counters { before: 1, after: 1 };
    let mut runs = runs.into_iter().peekable();

    while let Some(run) = runs.next() {
        match run {
            Run::Removed(removed) => {
                if let Some(Run::Added(added)) = runs.peek() {
                    let added = *added;
                    runs.next();
                    push_modification(&mut out, &mut counters, removed, added);
                } else {
                    for line in removed {
                        out.push(DiffLine::removed(*line, counters.before));
                        counters.before += 1;
                    }
                }
            }
            Run::Added(added) => {
                for line in added {
                    out.push(DiffLine::added(*line, counters.after));
                    counters.after += 1;
                }
            }
            Run::Kept(kept) => {
                for line in kept {
                    if !config.hide_unchanged_rows {
                        out.push(DiffLine::unchanged(*line, counters.before, counters.after));
                    }
                    counters.before += 1;
                    counters.after += 1;
                }
            }
        }
    }

    out
}

fn push_modification(out: &mut Vec<DiffLine>, counters: &mut Counters, removed: &[&str], added: &[&str]) {
    for i in 0..removed.len().max(added.len()) {
        let before = removed.get(i).copied();
        let after = added.get(i).copied();
        let changes = compute_word_changes(before.unwrap_or_default(), after.unwrap_or_default());

        if let Some(line) = before {
            out.push(DiffLine::removed(line, counters.before).with_word_changes(changes.clone()));
            counters.before += 1;
        }
        if let Some(line) = after {
            out.push(DiffLine::added(line, counters.after).with_word_changes(changes));
            counters.after += 1;
        }
    }
}
