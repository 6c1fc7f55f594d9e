//! Error types for generation and update operations.

use std::path::PathBuf;

use thiserror::Error;

use djsuite_templates::TemplateError;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while generating or updating a project.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("directory {0} already exists")]
    ProjectExists(PathBuf),

    #[error("{0} not found. Is this a djsuite project?\nRun 'djsuite new <project_name>' first to create a project.")]
    NotAProject(PathBuf),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
