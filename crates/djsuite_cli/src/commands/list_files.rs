//! List-files command - print every template-to-output mapping.

use anyhow::Result;
use clap::Args;

use djsuite_templates::{get_manifest, Platform};

use super::parse_platform;

#[derive(Args)]
pub struct ListFilesArgs {
    /// Deployment platform
    #[arg(long, default_value = "aws-eb", value_parser = parse_platform)]
    pub platform: Platform,
}

pub async fn execute(args: ListFilesArgs) -> Result<()> {
    let mut manifest = get_manifest(args.platform)?;
    manifest.sort_by_key(|entry| entry.output_path);

    for entry in manifest {
        println!(
            "  {:<60} -> {}  [{}]",
            entry.template_id(),
            entry.output_path,
            entry.group.as_str()
        );
    }
    Ok(())
}
