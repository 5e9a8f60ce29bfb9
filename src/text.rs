//! String convenience wrappers over the sequence diff and merge.
//!
//! Both wrappers split their inputs on a separator (newline by default) and
//! hand the resulting segment sequences to the core. The split preserves
//! empty segments so that a trailing separator yields a trailing empty
//! string and `join` reverses `split` exactly.

use serde::{Deserialize, Serialize};

use crate::diff::{Change, diff};
use crate::merge::{MergeResult, three_way_merge};

/// Separator used by the `_lines` wrappers.
pub const DEFAULT_SEPARATOR: &str = "\n";

fn split_segments(text: &str, separator: &str) -> Vec<String> {
    text.split(separator).map(str::to_string).collect()
}

/// Diffs two strings line by line.
#[must_use]
pub fn diff_lines(original: &str, modified: &str) -> Vec<Change<String>> {
    diff_split(original, modified, DEFAULT_SEPARATOR)
}

/// Diffs two strings split on an arbitrary separator.
#[must_use]
pub fn diff_split(original: &str, modified: &str, separator: &str) -> Vec<Change<String>> {
    let original = split_segments(original, separator);
    let modified = split_segments(modified, separator);
    diff(&original, &modified)
}

/// The outcome of a text-level three-way merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextMergeResult {
    /// The merge completed without conflicts; the merged text is rejoined
    /// with the separator it was split on.
    Merged(String),
    /// The merge has conflicts that need manual resolution.
    Conflicted {
        /// The conflict-free portion of the merge, rejoined.
        partial: String,
        /// The conflicting regions, in detection order.
        conflicts: Vec<LineConflict>,
    },
}

impl TextMergeResult {
    /// Returns true if the merge completed without conflicts.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }
}

/// A conflict at the line level, with each side rejoined into a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineConflict {
    base: String,
    ours: String,
    theirs: String,
    start_line: usize,
}

impl LineConflict {
    /// Creates a new line conflict.
    #[must_use]
    pub fn new(base: String, ours: String, theirs: String, start_line: usize) -> Self {
        Self {
            base,
            ours,
            theirs,
            start_line,
        }
    }

    /// The ancestor's text for the conflicted region.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The local side's replacement text.
    #[must_use]
    pub fn ours(&self) -> &str {
        &self.ours
    }

    /// The remote side's replacement text.
    #[must_use]
    pub fn theirs(&self) -> &str {
        &self.theirs
    }

    /// Line offset in the partial output at which the conflict would begin.
    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    /// Formats the conflict using Git-style conflict markers.
    ///
    /// The base section (`||||||| base`) is emitted only when the conflict
    /// covers ancestor content, matching diff3-style output.
    #[must_use]
    pub fn format_with_markers(&self, ours_name: &str, theirs_name: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("<<<<<<< {ours_name}\n"));
        if !self.ours.is_empty() {
            output.push_str(&self.ours);
            output.push('\n');
        }

        if !self.base.is_empty() {
            output.push_str("||||||| base\n");
            output.push_str(&self.base);
            output.push('\n');
        }

        output.push_str("=======\n");

        if !self.theirs.is_empty() {
            output.push_str(&self.theirs);
            output.push('\n');
        }

        output.push_str(&format!(">>>>>>> {theirs_name}\n"));

        output
    }
}

/// Merges three strings line by line.
#[must_use]
pub fn merge_lines(base: &str, ours: &str, theirs: &str) -> TextMergeResult {
    merge_split(base, ours, theirs, DEFAULT_SEPARATOR)
}

/// Merges three strings split on an arbitrary separator.
#[must_use]
pub fn merge_split(base: &str, ours: &str, theirs: &str, separator: &str) -> TextMergeResult {
    let base = split_segments(base, separator);
    let ours = split_segments(ours, separator);
    let theirs = split_segments(theirs, separator);

    match three_way_merge(&base, &ours, &theirs) {
        MergeResult::Success(merged) => TextMergeResult::Merged(merged.join(separator)),
        MergeResult::Conflict { partial, conflicts } => TextMergeResult::Conflicted {
            partial: partial.join(separator),
            conflicts: conflicts
                .into_iter()
                .map(|region| {
                    let start_line = region.start_index();
                    LineConflict::new(
                        region.base().join(separator),
                        region.ours().join(separator),
                        region.theirs().join(separator),
                        start_line,
                    )
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_join_round_trip() {
        for text in ["", "one", "one\ntwo", "one\ntwo\n", "\n\n"] {
            let segments = split_segments(text, "\n");
            assert_eq!(segments.join("\n"), text);
        }
    }

    #[test]
    fn test_trailing_separator_yields_empty_segment() {
        let segments = split_segments("a\nb\n", "\n");
        assert_eq!(segments, vec!["a", "b", ""]);
    }

    #[test]
    fn test_diff_lines_basic() {
        let changes = diff_lines("line1\nline2\nline3", "line1\nchanged\nline3");

        assert_eq!(
            changes,
            vec![
                Change::Equal {
                    index: 0,
                    element: "line1".to_string(),
                },
                Change::Delete {
                    index: 1,
                    element: "line2".to_string(),
                },
                Change::Insert {
                    index: 1,
                    element: "changed".to_string(),
                },
                Change::Equal {
                    index: 2,
                    element: "line3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_diff_split_custom_separator() {
        let changes = diff_split("a,b,c", "a,x,c", ",");
        let edits: Vec<_> = changes.iter().filter(|c| c.is_change()).collect();

        assert_eq!(edits.len(), 2);
    }

    #[test]
    fn test_merge_lines_success_rejoins() {
        let result = merge_lines(
            "line1\nline2\nline3\nline4",
            "line1\nmodified2\nline3\nline4",
            "line1\nline2\nline3\nmodified4",
        );

        assert_eq!(
            result,
            TextMergeResult::Merged("line1\nmodified2\nline3\nmodified4".to_string())
        );
    }

    #[test]
    fn test_merge_lines_conflict_reports_sides_and_start_line() {
        let result = merge_lines(
            "line1\nline2\nline3",
            "line1\nours\nline3",
            "line1\ntheirs\nline3",
        );

        match result {
            TextMergeResult::Conflicted { partial, conflicts } => {
                assert_eq!(partial, "line1\nline3");
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].base(), "line2");
                assert_eq!(conflicts[0].ours(), "ours");
                assert_eq!(conflicts[0].theirs(), "theirs");
                assert_eq!(conflicts[0].start_line(), 1);
            }
            TextMergeResult::Merged(_) => panic!("expected a conflict"),
        }
    }

    #[test]
    fn test_merge_lines_preserves_trailing_newline() {
        let result = merge_lines("a\nb\n", "a\nx\nb\n", "a\nb\n");

        assert_eq!(result, TextMergeResult::Merged("a\nx\nb\n".to_string()));
    }

    #[test]
    fn test_merge_split_custom_separator() {
        let result = merge_split("a,b,c", "a,x,c", "a,b,z", ",");

        assert_eq!(result, TextMergeResult::Merged("a,x,z".to_string()));
    }

    #[test]
    fn test_conflict_formatting_with_markers() {
        let conflict = LineConflict::new(
            "base-line".to_string(),
            "ours-line".to_string(),
            "theirs-line".to_string(),
            0,
        );

        let formatted = conflict.format_with_markers("ours", "theirs");

        assert_eq!(
            formatted,
            "<<<<<<< ours\n\
             ours-line\n\
             ||||||| base\n\
             base-line\n\
             =======\n\
             theirs-line\n\
             >>>>>>> theirs\n"
        );
    }

    #[test]
    fn test_marker_formatting_omits_empty_base() {
        let conflict = LineConflict::new(String::new(), "x".to_string(), "y".to_string(), 0);
        let formatted = conflict.format_with_markers("ours", "theirs");

        assert!(!formatted.contains("|||||||"));
        assert!(formatted.starts_with("<<<<<<< ours\n"));
        assert!(formatted.ends_with(">>>>>>> theirs\n"));
    }
}
