//! The fixed manifest mapping bundled template sources to output locations.
//!
//! Every entry names a template source (embedded in the binary at compile
//! time), the project-relative path it renders to, and the update group it
//! belongs to. The merged manifest is built once per call by appending the
//! platform table to the common table; it is never mutated.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};

/// A named partition of manifest entries that can be regenerated
/// independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateGroup {
    Ci,
    Docker,
    Infra,
    Root,
    AppMain,
    AppBase,
}

impl UpdateGroup {
    /// Canonical lowercase string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateGroup::Ci => "ci",
            UpdateGroup::Docker => "docker",
            UpdateGroup::Infra => "infra",
            UpdateGroup::Root => "root",
            UpdateGroup::AppMain => "app_main",
            UpdateGroup::AppBase => "app_base",
        }
    }
}

/// Deployment platform selecting the platform-specific manifest table and
/// template subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    AwsEb,
}

impl Platform {
    /// All known platforms, in declaration order.
    pub const ALL: &'static [Platform] = &[Platform::AwsEb];

    /// Canonical string form, as stored in config snapshots and accepted on
    /// the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::AwsEb => "aws-eb",
        }
    }

    /// Template subdirectory for this platform's entries.
    pub fn dir_prefix(&self) -> &'static str {
        match self {
            Platform::AwsEb => "platforms/aws_eb",
        }
    }

    /// Parse a canonical platform string, failing with the list of valid
    /// choices on anything unrecognized.
    pub fn from_str(value: &str) -> TemplateResult<Platform> {
        for platform in Self::ALL {
            if platform.as_str() == value {
                return Ok(*platform);
            }
        }
        Err(TemplateError::UnknownPlatform {
            value: value.to_string(),
            choices: Self::ALL.iter().map(|p| p.as_str()).collect(),
        })
    }
}

/// One manifest record: a bundled template source and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Template subdirectory ("common" or a platform prefix).
    pub dir_prefix: &'static str,
    /// Source path relative to the subdirectory.
    pub template_path: &'static str,
    /// Embedded source content.
    pub source: &'static str,
    /// Output path relative to the project root.
    pub output_path: &'static str,
    /// Update group this entry belongs to.
    pub group: UpdateGroup,
}

impl ManifestEntry {
    /// Whether this source runs through the templating engine (`.j2` suffix)
    /// or is copied verbatim.
    pub fn is_templated(&self) -> bool {
        self.template_path.ends_with(".j2")
    }

    /// Full source identifier, used in listings and error messages.
    pub fn template_id(&self) -> String {
        format!("{}/{}", self.dir_prefix, self.template_path)
    }
}

macro_rules! common {
    ($tpl:literal, $out:literal, $grp:ident) => {
        ManifestEntry {
            dir_prefix: "common",
            template_path: $tpl,
            source: include_str!(concat!("../templates/common/", $tpl)),
            output_path: $out,
            group: UpdateGroup::$grp,
        }
    };
}

macro_rules! aws_eb {
    ($tpl:literal, $out:literal, $grp:ident) => {
        ManifestEntry {
            dir_prefix: "platforms/aws_eb",
            template_path: $tpl,
            source: include_str!(concat!("../templates/platforms/aws_eb/", $tpl)),
            output_path: $out,
            group: UpdateGroup::$grp,
        }
    };
}

/// Entries shared by every platform.
const COMMON_MANIFEST: &[ManifestEntry] = &[
    // Root files
    common!("dotenv.j2", ".env", Root),
    common!("gitignore", ".gitignore", Root),
    common!("README.md.j2", "README.md", Root),
    common!("CONTRIBUTING.md.j2", "CONTRIBUTING.md", Root),
    common!("CHANGELOG.md", "CHANGELOG.md", Root),
    common!("pyproject.toml.j2", "pyproject.toml", Root),
    common!("docker-compose.yml.j2", "docker-compose.yml", Root),
    common!("pre-commit-config.yaml", ".pre-commit-config.yaml", Root),
    common!("manage.py", "manage.py", Root),
    common!("conftest.py.j2", "conftest.py", Root),
    // CI (.github/)
    common!(
        "github/copilot-instructions.md.j2",
        ".github/copilot-instructions.md",
        Ci
    ),
    common!(
        "github/PULL_REQUEST_TEMPLATE.md",
        ".github/PULL_REQUEST_TEMPLATE.md",
        Ci
    ),
    common!("github/release.yml", ".github/release.yml", Ci),
    common!("github/workflows/ci.yml.j2", ".github/workflows/ci.yml", Ci),
    common!(
        "github/workflows/auto-label.yml",
        ".github/workflows/auto-label.yml",
        Ci
    ),
    // main/ app
    common!("main/__init__.py", "main/__init__.py", AppMain),
    common!("main/apps.py", "main/apps.py", AppMain),
    common!("main/asgi.py", "main/asgi.py", AppMain),
    common!("main/celery.py.j2", "main/celery.py", AppMain),
    common!("main/settings.py.j2", "main/settings.py", AppMain),
    common!("main/urls.py", "main/urls.py", AppMain),
    common!("main/wsgi.py", "main/wsgi.py", AppMain),
    // base/ app
    common!("base/__init__.py", "base/__init__.py", AppBase),
    common!("base/apps.py", "base/apps.py", AppBase),
    common!("base/containers.py", "base/containers.py", AppBase),
    common!("base/models.py", "base/models.py", AppBase),
    common!("base/pagination.py", "base/pagination.py", AppBase),
    common!("base/urls.py", "base/urls.py", AppBase),
    common!("base/views.py", "base/views.py", AppBase),
    common!("base/constants/__init__.py", "base/constants/__init__.py", AppBase),
    common!(
        "base/constants/celery_task_status.py",
        "base/constants/celery_task_status.py",
        AppBase
    ),
    common!(
        "base/constants/magic_numbers.py",
        "base/constants/magic_numbers.py",
        AppBase
    ),
    common!(
        "base/constants/model_viewset.py",
        "base/constants/model_viewset.py",
        AppBase
    ),
    common!(
        "base/management/commands/createsu.py",
        "base/management/commands/createsu.py",
        AppBase
    ),
    common!(
        "base/migrations/__init__.py",
        "base/migrations/__init__.py",
        AppBase
    ),
    common!("base/services/__init__.py", "base/services/__init__.py", AppBase),
    common!(
        "base/services/orphan_service.py",
        "base/services/orphan_service.py",
        AppBase
    ),
    common!("base/tests/__init__.py", "base/tests/__init__.py", AppBase),
];

/// Entries specific to AWS Elastic Beanstalk deployments.
const AWS_EB_MANIFEST: &[ManifestEntry] = &[
    // Docker
    aws_eb!("Dockerfile.j2", "Dockerfile", Docker),
    aws_eb!("entrypoint.sh", "entrypoint.sh", Docker),
    aws_eb!("release.sh", "release.sh", Docker),
    aws_eb!("supervisord_app.conf", "supervisord_app.conf", Docker),
    aws_eb!(
        "supervisord_worker_beat.conf",
        "supervisord_worker_beat.conf",
        Docker
    ),
    // CD (.github/)
    aws_eb!(
        "github/workflows/dev-cd.yml.j2",
        ".github/workflows/dev-cd.yml",
        Ci
    ),
    aws_eb!(
        "github/workflows/prod-cd.yml.j2",
        ".github/workflows/prod-cd.yml",
        Ci
    ),
    // Platform hooks (.platform/)
    aws_eb!(
        "platform/hooks/postdeploy/01_release.sh",
        ".platform/hooks/postdeploy/01_release.sh",
        Infra
    ),
    aws_eb!(
        "platform/hooks/postdeploy/02_setup_log_whisperer.sh",
        ".platform/hooks/postdeploy/02_setup_log_whisperer.sh",
        Infra
    ),
    aws_eb!(
        "platform/hooks/predeploy/01_cleanup_log_whisperer_cron.sh",
        ".platform/hooks/predeploy/01_cleanup_log_whisperer_cron.sh",
        Infra
    ),
    // Infra
    aws_eb!(
        "infra/Dockerrun.aws.json.tmpl",
        "infra/Dockerrun.aws.json.tmpl",
        Infra
    ),
    // Nginx
    aws_eb!("nginx/celery.conf", "nginx/celery.conf", Infra),
    aws_eb!("nginx/default.conf", "nginx/default.conf", Infra),
];

fn platform_manifest(platform: Platform) -> &'static [ManifestEntry] {
    match platform {
        Platform::AwsEb => AWS_EB_MANIFEST,
    }
}

/// Merge the common and platform-specific tables into a single manifest.
///
/// Fails if any two entries resolve to the same output path; the bundled
/// tables avoid that by construction, but a collision would silently drop a
/// file, so it is treated as a configuration-integrity failure rather than
/// debug-only.
pub fn get_manifest(platform: Platform) -> TemplateResult<Vec<ManifestEntry>> {
    let mut merged = Vec::with_capacity(COMMON_MANIFEST.len() + platform_manifest(platform).len());
    merged.extend_from_slice(COMMON_MANIFEST);
    merged.extend_from_slice(platform_manifest(platform));

    let mut seen: HashMap<&'static str, &ManifestEntry> = HashMap::new();
    for entry in &merged {
        if let Some(first) = seen.insert(entry.output_path, entry) {
            return Err(TemplateError::DuplicateOutputPath {
                output_path: entry.output_path.to_string(),
                first: first.template_id(),
                second: entry.template_id(),
            });
        }
    }

    Ok(merged)
}

/// Manifest entries belonging to any of the given update groups.
pub fn files_for_groups(
    groups: &BTreeSet<UpdateGroup>,
    platform: Platform,
) -> TemplateResult<Vec<ManifestEntry>> {
    let manifest = get_manifest(platform)?;
    Ok(manifest
        .into_iter()
        .filter(|entry| groups.contains(&entry.group))
        .collect())
}

/// All output paths in ascending path-string order.
///
/// This ordering is the canonical display order for listings and dry runs.
pub fn all_output_paths(platform: Platform) -> TemplateResult<Vec<String>> {
    let mut paths: Vec<String> = get_manifest(platform)?
        .iter()
        .map(|entry| entry.output_path.to_string())
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_manifest_has_common_and_platform_entries() {
        let manifest = get_manifest(Platform::AwsEb).unwrap();
        assert!(manifest.iter().any(|e| e.dir_prefix == "common"));
        assert!(manifest
            .iter()
            .any(|e| e.dir_prefix == Platform::AwsEb.dir_prefix()));
        assert_eq!(
            manifest.len(),
            COMMON_MANIFEST.len() + AWS_EB_MANIFEST.len()
        );
    }

    #[test]
    fn output_paths_are_pairwise_distinct_for_all_platforms() {
        for platform in Platform::ALL {
            let manifest = get_manifest(*platform).unwrap();
            let unique: BTreeSet<&str> = manifest.iter().map(|e| e.output_path).collect();
            assert_eq!(unique.len(), manifest.len());
        }
    }

    #[test]
    fn template_keys_are_unique() {
        let manifest = get_manifest(Platform::AwsEb).unwrap();
        let keys: BTreeSet<(&str, &str)> = manifest
            .iter()
            .map(|e| (e.dir_prefix, e.template_path))
            .collect();
        assert_eq!(keys.len(), manifest.len());
    }

    #[test]
    fn unknown_platform_is_a_descriptive_error() {
        let err = Platform::from_str("heroku").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("heroku"));
        assert!(message.contains("aws-eb"));
    }

    #[test]
    fn platform_round_trips_through_its_string_form() {
        for platform in Platform::ALL {
            assert_eq!(Platform::from_str(platform.as_str()).unwrap(), *platform);
        }
    }

    #[test]
    fn files_for_groups_filters_by_group() {
        let groups = BTreeSet::from([UpdateGroup::Ci]);
        let subset = files_for_groups(&groups, Platform::AwsEb).unwrap();
        assert!(!subset.is_empty());
        assert!(subset.iter().all(|e| e.group == UpdateGroup::Ci));
        // CD workflows come from the platform table
        assert!(subset
            .iter()
            .any(|e| e.output_path == ".github/workflows/dev-cd.yml"));
    }

    #[test]
    fn files_for_empty_group_set_is_empty() {
        let subset = files_for_groups(&BTreeSet::new(), Platform::AwsEb).unwrap();
        assert!(subset.is_empty());
    }

    #[test]
    fn all_output_paths_are_sorted() {
        let paths = all_output_paths(Platform::AwsEb).unwrap();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), get_manifest(Platform::AwsEb).unwrap().len());
    }

    #[test]
    fn shell_script_sources_are_verbatim() {
        let manifest = get_manifest(Platform::AwsEb).unwrap();
        for entry in manifest.iter().filter(|e| e.output_path.ends_with(".sh")) {
            assert!(!entry.is_templated(), "{} should be static", entry.template_id());
        }
    }
}
