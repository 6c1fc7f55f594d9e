//! CLI command definitions.

use clap::{Parser, Subcommand};
use regex::Regex;

use djsuite_templates::Platform;

pub mod list_files;
pub mod new;
pub mod update;

#[derive(Parser)]
#[command(
    name = "djsuite",
    version,
    about = "Production-ready Django project scaffolding in one command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Django project
    New(new::NewArgs),
    /// Selectively update managed files in an existing project
    Update(update::UpdateArgs),
    /// List every template-to-output mapping
    ListFiles(list_files::ListFilesArgs),
}

/// Validate and normalize a project name to a valid Python identifier.
///
/// Hyphens are replaced with underscores first, so `my-app` becomes `my_app`.
pub(crate) fn parse_project_name(value: &str) -> Result<String, String> {
    let name = value.replace('-', "_");
    let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    if identifier.is_match(&name) {
        Ok(name)
    } else {
        Err(format!(
            "{value:?} is not a valid Python identifier (after replacing hyphens with underscores)"
        ))
    }
}

/// clap value parser for `--platform`.
pub(crate) fn parse_platform(value: &str) -> Result<Platform, String> {
    Platform::from_str(value).map_err(|e| e.to_string())
}
