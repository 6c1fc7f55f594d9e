//! Change classification between on-disk content and freshly rendered content.
//!
//! Purely advisory: the classification reports what an update would touch,
//! and the updater filters out `Unchanged` entries before writing. Nothing
//! here writes to disk.

use std::fmt;
use std::fs;
use std::path::Path;

use similar::{ChangeTag, TextDiff};

use crate::error::CoreResult;

/// Three-state change classification for a single output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No file exists at the target path.
    New,
    /// Byte-identical content.
    Unchanged,
    /// Differing content, with strictly-added and strictly-removed line counts.
    Changed { added: usize, removed: usize },
}

impl FileStatus {
    /// Classify rendered content against what currently exists (if anything).
    pub fn classify(existing: Option<&str>, new: &str) -> FileStatus {
        let Some(old) = existing else {
            return FileStatus::New;
        };
        if old == new {
            return FileStatus::Unchanged;
        }

        let diff = TextDiff::from_lines(old, new);
        let mut added = 0;
        let mut removed = 0;
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => added += 1,
                ChangeTag::Delete => removed += 1,
                ChangeTag::Equal => {}
            }
        }
        FileStatus::Changed { added, removed }
    }

    /// Classify rendered content against the file at
    /// `project_root/relative_path` (absent file classifies as [`New`]).
    ///
    /// [`New`]: FileStatus::New
    pub fn classify_path(
        project_root: &Path,
        relative_path: &str,
        new_content: &str,
    ) -> CoreResult<FileStatus> {
        let full_path = project_root.join(relative_path);
        if !full_path.exists() {
            return Ok(FileStatus::New);
        }
        let existing = fs::read_to_string(&full_path)?;
        Ok(FileStatus::classify(Some(&existing), new_content))
    }

    /// Whether an update needs to write this file.
    pub fn needs_write(&self) -> bool {
        !matches!(self, FileStatus::Unchanged)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::New => write!(f, "[NEW]"),
            FileStatus::Unchanged => write!(f, "[UNCHANGED]"),
            FileStatus::Changed { added, removed } => {
                write!(f, "[CHANGED] (+{added}/-{removed} lines)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absent_file_is_new() {
        assert_eq!(FileStatus::classify(None, "anything\n"), FileStatus::New);
    }

    #[test]
    fn identical_content_is_unchanged() {
        let content = "line one\nline two\n";
        assert_eq!(
            FileStatus::classify(Some(content), content),
            FileStatus::Unchanged
        );
    }

    #[test]
    fn one_inserted_line_counts_as_one_added() {
        let old = "a\nb\nc\n";
        let new = "a\nb\nextra\nc\n";
        assert_eq!(
            FileStatus::classify(Some(old), new),
            FileStatus::Changed { added: 1, removed: 0 }
        );
    }

    #[test]
    fn one_removed_line_counts_as_one_removed() {
        let old = "a\nb\nc\n";
        let new = "a\nc\n";
        assert_eq!(
            FileStatus::classify(Some(old), new),
            FileStatus::Changed { added: 0, removed: 1 }
        );
    }

    #[test]
    fn replaced_line_counts_on_both_sides() {
        let old = "a\nold\nc\n";
        let new = "a\nnew\nc\n";
        assert_eq!(
            FileStatus::classify(Some(old), new),
            FileStatus::Changed { added: 1, removed: 1 }
        );
    }

    #[test]
    fn classify_path_reads_from_disk() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("present.txt"), "same\n").unwrap();

        assert_eq!(
            FileStatus::classify_path(dir.path(), "absent.txt", "x\n").unwrap(),
            FileStatus::New
        );
        assert_eq!(
            FileStatus::classify_path(dir.path(), "present.txt", "same\n").unwrap(),
            FileStatus::Unchanged
        );
        assert!(
            FileStatus::classify_path(dir.path(), "present.txt", "different\n")
                .unwrap()
                .needs_write()
        );
    }

    #[test]
    fn display_formats_match_report_lines() {
        assert_eq!(FileStatus::New.to_string(), "[NEW]");
        assert_eq!(FileStatus::Unchanged.to_string(), "[UNCHANGED]");
        assert_eq!(
            FileStatus::Changed { added: 3, removed: 1 }.to_string(),
            "[CHANGED] (+3/-1 lines)"
        );
    }
}
