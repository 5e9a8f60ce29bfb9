//! Sequence diffing and three-way merging.
//!
//! `seqmerge` computes differences between two sequences of equatable
//! elements with Myers' O(ND) shortest-edit-script algorithm, and builds on
//! that primitive to perform a three-way merge of two divergent sequences
//! against a common ancestor. The merge returns either the merged sequence
//! or a structured report of conflicting regions; a conflict is an ordinary
//! value, never an error.
//!
//! Both operations are pure functions over finite sequences: no I/O, no
//! shared state, identical inputs yield identical outputs.
//!
//! # Diffing
//!
//! ```
//! use seqmerge::{Change, diff};
//!
//! let script = diff(&['a', 'b', 'c'], &['a', 'x', 'c']);
//!
//! assert_eq!(
//!     script,
//!     vec![
//!         Change::Equal { index: 0, element: 'a' },
//!         Change::Delete { index: 1, element: 'b' },
//!         Change::Insert { index: 1, element: 'x' },
//!         Change::Equal { index: 2, element: 'c' },
//!     ]
//! );
//! ```
//!
//! # Merging
//!
//! ```
//! use seqmerge::{MergeResult, three_way_merge};
//!
//! let base = ['a', 'b', 'c', 'd'];
//! let ours = ['a', 'x', 'c', 'd'];
//! let theirs = ['a', 'b', 'c', 'y'];
//!
//! assert_eq!(
//!     three_way_merge(&base, &ours, &theirs),
//!     MergeResult::Success(vec!['a', 'x', 'c', 'y'])
//! );
//! ```
//!
//! # Text
//!
//! The [`text`] module wraps both operations for strings, splitting on a
//! separator (newline by default) and rejoining the results. Conflicts can
//! be rendered with Git-style markers via
//! [`text::LineConflict::format_with_markers`].

#![warn(missing_docs)]

pub mod diff;
pub mod merge;
pub mod text;

pub use diff::{Change, DiffAlgorithm, MyersDiff, apply_changes, diff};
pub use merge::{ConflictRegion, MergeResult, three_way_merge, three_way_merge_with};
pub use text::{
    LineConflict, TextMergeResult, diff_lines, diff_split, merge_lines, merge_split,
};
