//! Selective update of files in existing projects.
//!
//! State machine: load config -> resolve manifest -> render -> classify ->
//! (skip if nothing changed) -> backup? -> write. The only terminal failure
//! before disk is touched is a missing config snapshot; everything after
//! rendering operates on an already-validated file set.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::info;

use djsuite_templates::{files_for_groups, Renderer, UpdateGroup};

use crate::backup::backup_files;
use crate::config::ProjectConfig;
use crate::diff::FileStatus;
use crate::error::CoreResult;
use crate::generator::write_rendered_file;

/// What an update run did, for callers that need more than an exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The requested groups resolved to no manifest entries.
    NothingToUpdate,
    /// Every rendered file matched what is on disk; nothing was written.
    UpToDate { checked: usize },
    /// Changed and new files were written (after an optional backup).
    Updated {
        statuses: BTreeMap<String, FileStatus>,
        written: Vec<String>,
        backup_dir: Option<PathBuf>,
    },
}

/// Re-render the manifest subset for `groups` against an existing project,
/// overwrite only the files whose content changed, and back those up first
/// unless `no_backup` is set.
pub fn run_update(
    project_dir: &Path,
    groups: &BTreeSet<UpdateGroup>,
    no_backup: bool,
) -> CoreResult<UpdateOutcome> {
    let config = ProjectConfig::load(project_dir)?;
    let platform = config.resolve_platform()?;
    let context = config.context();

    let manifest = files_for_groups(groups, platform)?;
    if manifest.is_empty() {
        println!("No files to update for the selected groups.");
        return Ok(UpdateOutcome::NothingToUpdate);
    }

    info!(
        "Updating {} manifest entries in {}",
        manifest.len(),
        project_dir.display()
    );

    let renderer = Renderer::new();
    let rendered = renderer.render_all(&manifest, &context)?;

    println!(
        "Updating {} file(s) in {}:\n",
        rendered.len(),
        project_dir.display()
    );

    let mut statuses: BTreeMap<String, FileStatus> = BTreeMap::new();
    for (output_path, content) in &rendered {
        let status = FileStatus::classify_path(project_dir, output_path, content)?;
        println!("  {:<30} {}", status.to_string(), output_path);
        statuses.insert(output_path.clone(), status);
    }

    let to_write: Vec<&String> = rendered
        .keys()
        .filter(|path| statuses[*path].needs_write())
        .collect();

    if to_write.is_empty() {
        println!("\nAll files are up to date.");
        return Ok(UpdateOutcome::UpToDate {
            checked: rendered.len(),
        });
    }

    let backup_dir = if no_backup {
        None
    } else {
        let paths: Vec<String> = to_write.iter().map(|p| (*p).clone()).collect();
        backup_files(project_dir, &paths)?
    };

    let mut written = Vec::with_capacity(to_write.len());
    for output_path in to_write {
        write_rendered_file(project_dir, output_path, &rendered[output_path])?;
        written.push(output_path.clone());
    }

    println!("\nUpdated {} file(s).", written.len());

    Ok(UpdateOutcome::Updated {
        statuses,
        written,
        backup_dir,
    })
}
