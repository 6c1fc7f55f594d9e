//! Update command - selective re-application of template updates.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use djsuite_core::run_update;
use djsuite_templates::UpdateGroup;

#[derive(Args)]
pub struct UpdateArgs {
    /// Update CI/CD workflow files
    #[arg(long)]
    pub ci: bool,

    /// Update Docker files
    #[arg(long)]
    pub docker: bool,

    /// Update infrastructure files
    #[arg(long)]
    pub infra: bool,

    /// Update all updatable files (ci, docker, infra, root)
    #[arg(long)]
    pub all: bool,

    /// Project directory
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Skip backup before updating
    #[arg(long)]
    pub no_backup: bool,
}

/// Map CLI flags to the set of update groups.
fn update_groups(args: &UpdateArgs) -> BTreeSet<UpdateGroup> {
    if args.all {
        return BTreeSet::from([
            UpdateGroup::Ci,
            UpdateGroup::Docker,
            UpdateGroup::Infra,
            UpdateGroup::Root,
        ]);
    }
    let mut groups = BTreeSet::new();
    if args.ci {
        groups.insert(UpdateGroup::Ci);
    }
    if args.docker {
        groups.insert(UpdateGroup::Docker);
    }
    if args.infra {
        groups.insert(UpdateGroup::Infra);
    }
    groups
}

pub async fn execute(args: UpdateArgs) -> Result<()> {
    let groups = update_groups(&args);
    if groups.is_empty() {
        anyhow::bail!("no update groups selected (use --ci, --docker, --infra or --all)");
    }

    run_update(&args.project_dir, &groups, args.no_backup)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(ci: bool, docker: bool, infra: bool, all: bool) -> UpdateArgs {
        UpdateArgs {
            ci,
            docker,
            infra,
            all,
            project_dir: PathBuf::from("."),
            no_backup: false,
        }
    }

    #[test]
    fn individual_flags_map_to_their_groups() {
        let groups = update_groups(&args(true, false, true, false));
        assert_eq!(
            groups,
            BTreeSet::from([UpdateGroup::Ci, UpdateGroup::Infra])
        );
    }

    #[test]
    fn all_expands_to_every_updatable_group() {
        let groups = update_groups(&args(false, false, false, true));
        assert_eq!(
            groups,
            BTreeSet::from([
                UpdateGroup::Ci,
                UpdateGroup::Docker,
                UpdateGroup::Infra,
                UpdateGroup::Root,
            ])
        );
    }

    #[test]
    fn no_flags_selects_nothing() {
        assert!(update_groups(&args(false, false, false, false)).is_empty());
    }
}
