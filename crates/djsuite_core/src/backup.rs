//! Timestamped backup of files about to be overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use filetime::FileTime;
use tracing::debug;

use crate::error::CoreResult;

/// Backup folder name under the project root.
pub const BACKUP_DIR_NAME: &str = ".djsuite-backup";

/// Copy every existing `relative_path` under `project_dir` into a
/// timestamped backup directory, mirroring the relative path structure and
/// carrying over the source modification time.
///
/// Paths that do not currently exist are silently skipped: a file being
/// created for the first time has nothing to back up. Returns the backup
/// directory if at least one file was copied, `None` otherwise — the
/// directory is only created when there is something to put in it.
pub fn backup_files(project_dir: &Path, relative_paths: &[String]) -> CoreResult<Option<PathBuf>> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_dir = project_dir.join(BACKUP_DIR_NAME).join(&timestamp);

    let mut backed_up = 0usize;
    for rel_path in relative_paths {
        let src = project_dir.join(rel_path);
        if !src.exists() {
            continue;
        }

        let dst = backup_dir.join(rel_path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst)?;

        let metadata = fs::metadata(&src)?;
        filetime::set_file_mtime(&dst, FileTime::from_last_modification_time(&metadata))?;

        debug!("Backed up {} to {}", rel_path, dst.display());
        backed_up += 1;
    }

    if backed_up > 0 {
        println!("Backed up {} file(s) to {}", backed_up, backup_dir.display());
        Ok(Some(backup_dir))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn no_existing_paths_means_no_backup_directory() {
        let dir = tempdir().unwrap();
        let result = backup_files(
            dir.path(),
            &["missing.txt".to_string(), "also/missing.txt".to_string()],
        )
        .unwrap();
        assert!(result.is_none());
        assert!(!dir.path().join(BACKUP_DIR_NAME).exists());
    }

    #[test]
    fn only_existing_files_are_copied() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/present.txt"), "content\n").unwrap();

        let paths = vec![
            "absent_a.txt".to_string(),
            "nested/present.txt".to_string(),
            "absent_b.txt".to_string(),
        ];
        let backup_dir = backup_files(dir.path(), &paths).unwrap().expect("backup dir");

        assert!(backup_dir.starts_with(dir.path().join(BACKUP_DIR_NAME)));
        assert_eq!(
            fs::read_to_string(backup_dir.join("nested/present.txt")).unwrap(),
            "content\n"
        );
        assert!(!backup_dir.join("absent_a.txt").exists());
        assert!(!backup_dir.join("absent_b.txt").exists());
    }

    #[test]
    fn backup_preserves_modification_time() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("file.txt");
        fs::write(&src, "content\n").unwrap();
        let past = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_mtime(&src, past).unwrap();

        let backup_dir = backup_files(dir.path(), &["file.txt".to_string()])
            .unwrap()
            .expect("backup dir");

        let copied = fs::metadata(backup_dir.join("file.txt")).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&copied), past);
    }
}
