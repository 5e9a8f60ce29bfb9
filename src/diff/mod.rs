//! Sequence diffing via shortest edit scripts.
//!
//! This module provides the edit-script data model and the entry point for
//! computing differences between two sequences of equatable elements. The
//! algorithm lives in [`myers`]; everything here is the shared contract:
//! the [`Change`] atom, the [`DiffAlgorithm`] seam, and [`apply_changes`]
//! for replaying a script.

pub mod myers;

pub use myers::MyersDiff;

use serde::{Deserialize, Serialize};

/// A single atom of an edit script.
///
/// Index semantics differ per variant: for [`Change::Equal`] and
/// [`Change::Delete`] the index refers to a position in the *original*
/// sequence; for [`Change::Insert`] it refers to a position in the
/// *modified* sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change<E> {
    /// Element present in both sequences.
    Equal {
        /// Position of the element in the original sequence.
        index: usize,
        /// The unchanged element.
        element: E,
    },
    /// Element removed from the original sequence.
    Delete {
        /// Position of the removed element in the original sequence.
        index: usize,
        /// The removed element.
        element: E,
    },
    /// Element added by the modified sequence.
    Insert {
        /// Position of the added element in the modified sequence.
        index: usize,
        /// The added element.
        element: E,
    },
}

impl<E> Change<E> {
    /// Returns the index carried by this atom.
    ///
    /// See the variant documentation for which sequence the index refers to.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Equal { index, .. } | Self::Delete { index, .. } | Self::Insert { index, .. } => {
                *index
            }
        }
    }

    /// Returns a reference to the element carried by this atom.
    #[must_use]
    pub fn element(&self) -> &E {
        match self {
            Self::Equal { element, .. }
            | Self::Delete { element, .. }
            | Self::Insert { element, .. } => element,
        }
    }

    /// Returns true if this atom represents a change (not an equality).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

/// Trait for shortest-edit-script diff algorithms.
///
/// [`MyersDiff`] is the provided implementation. The trait exists so that
/// callers (the three-way merge engine in particular) can be parameterized
/// over the diff backend.
pub trait DiffAlgorithm {
    /// Computes the edit script that transforms `original` into `modified`.
    ///
    /// The returned script, applied left to right to `original` (deleting
    /// deletes, inserting inserts, passing equals through), reproduces
    /// `modified`.
    fn diff<E: PartialEq + Clone>(&self, original: &[E], modified: &[E]) -> Vec<Change<E>>;
}

/// Computes the shortest edit script between two sequences.
///
/// Convenience entry point over [`MyersDiff`]. The script's edit count
/// (inserts plus deletes) is minimal, and repeated calls on the same inputs
/// yield the identical script.
#[must_use]
pub fn diff<E: PartialEq + Clone>(original: &[E], modified: &[E]) -> Vec<Change<E>> {
    MyersDiff::new().diff(original, modified)
}

/// Replays an edit script against the original sequence.
///
/// Deletes skip the element, inserts emit the carried element, equals pass
/// the original element through. Atoms whose indices fall outside `original`
/// are ignored rather than panicking.
#[must_use]
pub fn apply_changes<E: Clone>(original: &[E], changes: &[Change<E>]) -> Vec<E> {
    let mut result = Vec::new();

    for change in changes {
        match change {
            Change::Equal { index, .. } => {
                if let Some(element) = original.get(*index) {
                    result.push(element.clone());
                }
            }
            Change::Delete { .. } => {}
            Change::Insert { element, .. } => result.push(element.clone()),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_index_and_element() {
        let equal = Change::Equal {
            index: 3,
            element: "a",
        };
        assert_eq!(equal.index(), 3);
        assert_eq!(*equal.element(), "a");

        let delete = Change::Delete {
            index: 1,
            element: "b",
        };
        assert_eq!(delete.index(), 1);
        assert!(delete.is_change());

        let insert = Change::Insert {
            index: 0,
            element: "c",
        };
        assert_eq!(insert.index(), 0);
        assert!(insert.is_change());
        assert!(!equal.is_change());
    }

    #[test]
    fn test_apply_changes_replays_script() {
        let original = vec!['a', 'b', 'c'];
        let script = vec![
            Change::Equal {
                index: 0,
                element: 'a',
            },
            Change::Delete {
                index: 1,
                element: 'b',
            },
            Change::Insert {
                index: 1,
                element: 'x',
            },
            Change::Equal {
                index: 2,
                element: 'c',
            },
        ];

        assert_eq!(apply_changes(&original, &script), vec!['a', 'x', 'c']);
    }

    #[test]
    fn test_apply_changes_ignores_out_of_bounds_equal() {
        let original = vec!['a'];
        let script = vec![Change::Equal {
            index: 9,
            element: 'z',
        }];

        assert!(apply_changes(&original, &script).is_empty());
    }

    #[test]
    fn test_change_serialization_shape() {
        let insert = Change::Insert {
            index: 1,
            element: "x".to_string(),
        };
        let json = serde_json::to_string(&insert).unwrap();

        assert_eq!(json, r#"{"Insert":{"index":1,"element":"x"}}"#);

        let back: Change<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, insert);
    }
}
