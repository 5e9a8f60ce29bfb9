//! Myers diff algorithm implementation.
//!
//! The classic O(ND) greedy edit-graph search described by Eugene Myers in
//! "An O(ND) Difference Algorithm and Its Variations" (1986). The forward
//! pass records a snapshot of the furthest-reaching frontier for every edit
//! distance `d`; backtracking walks those snapshots from the terminating
//! distance down to zero and emits the edit script.

use super::{Change, DiffAlgorithm};

/// Myers shortest-edit-script diff.
///
/// Deterministic: when several minimum scripts exist, ties between a delete
/// and an insert are resolved in favor of the delete, which fixes the shape
/// of the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl MyersDiff {
    /// Creates a new Myers diff instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersDiff {
    fn diff<E: PartialEq + Clone>(&self, original: &[E], modified: &[E]) -> Vec<Change<E>> {
        if original.is_empty() && modified.is_empty() {
            return Vec::new();
        }

        if original.is_empty() {
            return modified
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, element)| Change::Insert { index, element })
                .collect();
        }

        if modified.is_empty() {
            return original
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, element)| Change::Delete { index, element })
                .collect();
        }

        let trace = forward_trace(original, modified);
        backtrack(original, modified, &trace)
    }
}

/// Runs the forward pass and returns the frontier snapshots.
///
/// `v[offset + k]` holds the furthest-reaching `x` on diagonal `k = x - y`
/// for the edit distance currently being explored. A snapshot of `v` is
/// pushed before each distance is processed, so `trace[d]` reflects the
/// state after distance `d - 1`.
fn forward_trace<E: PartialEq>(original: &[E], modified: &[E]) -> Vec<Vec<isize>> {
    let n = original.len() as isize;
    let m = modified.len() as isize;
    let max = n + m;
    let offset = max;

    let mut v: Vec<isize> = vec![0; 2 * max as usize + 1];
    let mut trace = Vec::new();

    for d in 0..=max {
        trace.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let idx = (offset + k) as usize;

            // At k == -d the only predecessor is k + 1 (an insertion); at
            // k == d it is k - 1 (a deletion). In between, extend the
            // neighbor that reaches further, deleting on ties.
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && original[x as usize] == modified[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                return trace;
            }
        }
    }

    trace
}

/// Walks the trace backwards from `(n, m)` and reconstructs the edit script.
fn backtrack<E: PartialEq + Clone>(
    original: &[E],
    modified: &[E],
    trace: &[Vec<isize>],
) -> Vec<Change<E>> {
    let offset = (original.len() + modified.len()) as isize;
    let mut x = original.len() as isize;
    let mut y = modified.len() as isize;
    let mut changes = Vec::new();

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;
        let idx = (offset + k) as usize;

        // Mirror of the forward move rule: which diagonal did we come from?
        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(offset + prev_k) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            changes.push(Change::Equal {
                index: (x - 1) as usize,
                element: original[(x - 1) as usize].clone(),
            });
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if x == prev_x {
                changes.push(Change::Insert {
                    index: (y - 1) as usize,
                    element: modified[(y - 1) as usize].clone(),
                });
                y -= 1;
            } else {
                changes.push(Change::Delete {
                    index: (x - 1) as usize,
                    element: original[(x - 1) as usize].clone(),
                });
                x -= 1;
            }
        }
    }

    changes.reverse();
    changes
}
