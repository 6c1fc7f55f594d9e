//! New command - create a project from the bundled templates.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use djsuite_core::{dry_run, generate};
use djsuite_templates::{Platform, RenderContext};

use super::{parse_platform, parse_project_name};

#[derive(Args)]
pub struct NewArgs {
    /// Name of the new Django project (must be a valid Python identifier)
    #[arg(value_parser = parse_project_name)]
    pub project_name: String,

    /// Python version
    #[arg(long, default_value = "3.12")]
    pub python_version: String,

    /// Django version
    #[arg(long, default_value = "5.2")]
    pub django_version: String,

    /// DRF version
    #[arg(long, default_value = "3.16")]
    pub drf_version: String,

    /// Author name (default: system username)
    #[arg(long, env = "USER", default_value = "")]
    pub author: String,

    /// Project description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Output directory
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Deployment platform
    #[arg(long, default_value = "aws-eb", value_parser = parse_platform)]
    pub platform: Platform,

    /// Show what would be created without writing files
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(args: NewArgs) -> Result<()> {
    let context = RenderContext {
        project_name: args.project_name.clone(),
        python_version: args.python_version,
        django_version: args.django_version,
        drf_version: args.drf_version,
        author: args.author,
        description: args.description,
        platform: args.platform.as_str().to_string(),
    };

    if args.dry_run {
        dry_run(&context, &args.output_dir, args.platform)?;
        return Ok(());
    }

    info!("Creating project: {}", args.project_name);
    generate(&context, &args.output_dir, args.platform)?;
    Ok(())
}
