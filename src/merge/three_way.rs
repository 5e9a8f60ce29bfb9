//! Edit-range grouping and the lockstep merge walk.

use tracing::{debug, trace};

use super::{ConflictRegion, MergeResult};
use crate::diff::Change;

/// A contiguous slice of base indices `[base_start, base_start + base_count)`
/// replaced by `replacement`.
///
/// Pure insertions have `base_count == 0` and anchor at the base position
/// reached when they were emitted; pure deletions have an empty replacement.
/// Ranges derived from one edit script are ordered by `base_start` and do
/// not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EditRange<E> {
    pub(crate) base_start: usize,
    pub(crate) base_count: usize,
    pub(crate) replacement: Vec<E>,
}

impl<E> EditRange<E> {
    fn base_end(&self) -> usize {
        self.base_start + self.base_count
    }
}

/// Groups an edit script into coarser edit ranges anchored in base indices.
///
/// Maximal runs of `Delete` and `Insert` atoms (no intervening `Equal`) fuse
/// into a single replace range; the delete indices fix the covered base
/// slice, and the insert elements in run order form the replacement.
pub(crate) fn group_changes<E: Clone>(changes: &[Change<E>]) -> Vec<EditRange<E>> {
    let mut ranges = Vec::new();
    let mut base_pos = 0;
    let mut i = 0;

    while i < changes.len() {
        if let Change::Equal { index, .. } = &changes[i] {
            base_pos = index + 1;
            i += 1;
            continue;
        }

        let mut delete_indices = Vec::new();
        let mut insert_elements = Vec::new();

        while i < changes.len() {
            match &changes[i] {
                Change::Equal { .. } => break,
                Change::Delete { index, .. } => delete_indices.push(*index),
                Change::Insert { element, .. } => insert_elements.push(element.clone()),
            }
            i += 1;
        }

        let base_start = delete_indices.first().copied().unwrap_or(base_pos);
        if let Some(last) = delete_indices.last() {
            base_pos = last + 1;
        }

        ranges.push(EditRange {
            base_start,
            base_count: delete_indices.len(),
            replacement: insert_elements,
        });
    }

    ranges
}

/// Returns true if the two ranges compete for the same base region.
///
/// Half-open intervals overlap when each starts before the other ends.
/// Zero-width ranges (pure insertions) never satisfy that strictly, so
/// equal-start ranges where either side is zero-width are treated as
/// overlapping: two insertions at the same base position compete for the
/// same spot.
fn ranges_overlap<E>(ours: &EditRange<E>, theirs: &EditRange<E>) -> bool {
    if ours.base_start == theirs.base_start && (ours.base_count == 0 || theirs.base_count == 0) {
        return true;
    }
    ours.base_start < theirs.base_end() && theirs.base_start < ours.base_end()
}

/// Walks the base left to right, merging the two ordered edit-range lists.
///
/// Conflicting regions are recorded but never written into the output
/// buffer, so `start_index` values are offsets into the partial result and
/// consecutive conflicts can share one.
pub(crate) fn merge_walk<E: PartialEq + Clone>(
    base: &[E],
    ours: &[EditRange<E>],
    theirs: &[EditRange<E>],
) -> MergeResult<E> {
    let mut result: Vec<E> = Vec::new();
    let mut conflicts: Vec<ConflictRegion<E>> = Vec::new();
    let mut ours_idx = 0;
    let mut theirs_idx = 0;
    let mut base_pos = 0;

    loop {
        match (ours.get(ours_idx), theirs.get(theirs_idx)) {
            (Some(o), Some(t)) => {
                // Edits overtaken by a previous conflict are dropped.
                if o.base_start < base_pos {
                    trace!("skipping stale ours edit at base {}", o.base_start);
                    ours_idx += 1;
                    continue;
                }
                if t.base_start < base_pos {
                    trace!("skipping stale theirs edit at base {}", t.base_start);
                    theirs_idx += 1;
                    continue;
                }

                let next = o.base_start.min(t.base_start);
                result.extend_from_slice(&base[base_pos..next]);
                base_pos = next;

                if ranges_overlap(o, t) {
                    let o_end = o.base_end();
                    let t_end = t.base_end();

                    if o.base_start == t.base_start
                        && o.base_count == t.base_count
                        && o.replacement == t.replacement
                    {
                        trace!("identical edit on both sides at base {}", o.base_start);
                        result.extend_from_slice(&o.replacement);
                    } else {
                        let region_start = o.base_start.min(t.base_start);
                        let region_end = o_end.max(t_end).min(base.len());
                        conflicts.push(ConflictRegion::new(
                            base[region_start..region_end].to_vec(),
                            o.replacement.clone(),
                            t.replacement.clone(),
                            result.len(),
                        ));
                    }

                    base_pos = o_end.max(t_end);
                    ours_idx += 1;
                    theirs_idx += 1;
                } else if o.base_start < t.base_start {
                    trace!("applying ours edit at base {}", o.base_start);
                    result.extend_from_slice(&o.replacement);
                    base_pos = o.base_end();
                    ours_idx += 1;
                } else {
                    trace!("applying theirs edit at base {}", t.base_start);
                    result.extend_from_slice(&t.replacement);
                    base_pos = t.base_end();
                    theirs_idx += 1;
                }
            }
            (Some(o), None) => {
                if o.base_start < base_pos {
                    trace!("skipping stale ours edit at base {}", o.base_start);
                    ours_idx += 1;
                    continue;
                }
                result.extend_from_slice(&base[base_pos..o.base_start]);
                result.extend_from_slice(&o.replacement);
                base_pos = o.base_end();
                ours_idx += 1;
            }
            (None, Some(t)) => {
                if t.base_start < base_pos {
                    trace!("skipping stale theirs edit at base {}", t.base_start);
                    theirs_idx += 1;
                    continue;
                }
                result.extend_from_slice(&base[base_pos..t.base_start]);
                result.extend_from_slice(&t.replacement);
                base_pos = t.base_end();
                theirs_idx += 1;
            }
            (None, None) => {
                result.extend_from_slice(&base[base_pos..]);
                break;
            }
        }
    }

    debug!(
        "merge walk complete: {} elements, {} conflicts",
        result.len(),
        conflicts.len()
    );

    if conflicts.is_empty() {
        MergeResult::Success(result)
    } else {
        MergeResult::Conflict {
            partial: result,
            conflicts,
        }
    }
}
