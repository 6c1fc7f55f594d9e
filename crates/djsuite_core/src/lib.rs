//! # djsuite_core
//!
//! Project generation and maintenance for djsuite.
//!
//! This crate orchestrates the template manifest and renderer from
//! `djsuite_templates` into the two user-visible operations:
//!
//! - [`generator::generate`] — create a whole new project from the merged
//!   manifest, persist a config snapshot, and optionally pin dependencies
//! - [`updater::run_update`] — selectively re-render update groups against an
//!   existing project, classifying each file (new / unchanged / changed),
//!   backing up and overwriting only what changed

pub mod backup;
pub mod config;
pub mod diff;
pub mod error;
pub mod generator;
pub mod updater;

pub use backup::backup_files;
pub use config::{ProjectConfig, CONFIG_FILE_NAME};
pub use diff::FileStatus;
pub use error::{CoreError, CoreResult};
pub use generator::{dry_run, generate};
pub use updater::{run_update, UpdateOutcome};

/// Tool version recorded in every config snapshot.
pub const DJSUITE_VERSION: &str = env!("CARGO_PKG_VERSION");
