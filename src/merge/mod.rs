//! Three-way merge of two divergent sequences against a common ancestor.
//!
//! The merge engine diffs `base -> ours` and `base -> theirs`, groups each
//! edit script into contiguous edit ranges anchored in base indices, and
//! walks both range lists in lockstep over the base. Regions changed by only
//! one side are applied; regions changed identically by both sides are
//! applied once; overlapping, differing regions become [`ConflictRegion`]s.
//!
//! A conflict is an ordinary return value, not an error: callers distinguish
//! outcomes via the [`MergeResult`] variant.

mod three_way;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diff::{DiffAlgorithm, MyersDiff};
use three_way::group_changes;

/// The outcome of a three-way merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeResult<E> {
    /// The merge completed without conflicts.
    Success(Vec<E>),
    /// At least one region was changed incompatibly by both sides.
    Conflict {
        /// The walk output with conflicting regions omitted.
        partial: Vec<E>,
        /// The conflicting regions, in detection order.
        conflicts: Vec<ConflictRegion<E>>,
    },
}

impl<E> MergeResult<E> {
    /// Returns true if the merge completed without conflicts.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the conflicting regions, empty on success.
    #[must_use]
    pub fn conflicts(&self) -> &[ConflictRegion<E>] {
        match self {
            Self::Success(_) => &[],
            Self::Conflict { conflicts, .. } => conflicts,
        }
    }
}

/// A contiguous region of the ancestor on which the two sides proposed
/// incompatible replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRegion<E> {
    base: Vec<E>,
    ours: Vec<E>,
    theirs: Vec<E>,
    start_index: usize,
}

impl<E> ConflictRegion<E> {
    /// Creates a new conflict region.
    #[must_use]
    pub fn new(base: Vec<E>, ours: Vec<E>, theirs: Vec<E>, start_index: usize) -> Self {
        Self {
            base,
            ours,
            theirs,
            start_index,
        }
    }

    /// The slice of the ancestor covered by the conflict.
    #[must_use]
    pub fn base(&self) -> &[E] {
        &self.base
    }

    /// The replacement proposed by the local side.
    #[must_use]
    pub fn ours(&self) -> &[E] {
        &self.ours
    }

    /// The replacement proposed by the remote side.
    #[must_use]
    pub fn theirs(&self) -> &[E] {
        &self.theirs
    }

    /// Offset in the merged output at which the conflict would begin.
    ///
    /// This is the length of the partial result at the moment the conflict
    /// was detected; consecutive conflicts with no copied base between them
    /// share the same offset.
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.start_index
    }
}

/// Performs a three-way merge using the Myers diff.
///
/// Equality gates run before any diff is computed: if either side left the
/// base untouched the other side wins outright, and if both sides agree the
/// shared version wins.
#[must_use]
pub fn three_way_merge<E: PartialEq + Clone>(
    base: &[E],
    ours: &[E],
    theirs: &[E],
) -> MergeResult<E> {
    three_way_merge_with(base, ours, theirs, &MyersDiff::new())
}

/// Performs a three-way merge using the provided diff algorithm.
#[must_use]
pub fn three_way_merge_with<E, A>(
    base: &[E],
    ours: &[E],
    theirs: &[E],
    algorithm: &A,
) -> MergeResult<E>
where
    E: PartialEq + Clone,
    A: DiffAlgorithm + ?Sized,
{
    if base == ours && base == theirs {
        debug!("three-way merge fast path: all inputs equal");
        return MergeResult::Success(base.to_vec());
    }
    if base == ours {
        debug!("three-way merge fast path: only theirs changed");
        return MergeResult::Success(theirs.to_vec());
    }
    if base == theirs {
        debug!("three-way merge fast path: only ours changed");
        return MergeResult::Success(ours.to_vec());
    }
    if ours == theirs {
        debug!("three-way merge fast path: both sides made the same change");
        return MergeResult::Success(ours.to_vec());
    }

    let ours_edits = group_changes(&algorithm.diff(base, ours));
    let theirs_edits = group_changes(&algorithm.diff(base, theirs));

    three_way::merge_walk(base, &ours_edits, &theirs_edits)
}
