//! The `.djsuite.json` config snapshot.
//!
//! Written once at generation time and read back by every update; the
//! snapshot, not the command line, is the source of truth for the render
//! context of an existing project.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use djsuite_templates::{Platform, RenderContext};

use crate::error::{CoreError, CoreResult};

/// Fixed snapshot filename at the project root.
pub const CONFIG_FILE_NAME: &str = ".djsuite.json";

fn default_platform() -> String {
    // Snapshots predating platform support were all aws-eb
    Platform::AwsEb.as_str().to_string()
}

/// Persisted record of the context and platform a project was generated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub djsuite_version: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub python_version: String,
    #[serde(default)]
    pub django_version: String,
    #[serde(default)]
    pub drf_version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl ProjectConfig {
    /// Build a snapshot from the context used to generate a project.
    pub fn from_context(version: &str, context: &RenderContext) -> Self {
        Self {
            djsuite_version: version.to_string(),
            platform: context.platform.clone(),
            project_name: context.project_name.clone(),
            python_version: context.python_version.clone(),
            django_version: context.django_version.clone(),
            drf_version: context.drf_version.clone(),
            author: context.author.clone(),
            description: context.description.clone(),
        }
    }

    /// Load the snapshot from `project_dir`, failing with
    /// [`CoreError::NotAProject`] when the file is absent.
    pub fn load(project_dir: &Path) -> CoreResult<Self> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Err(CoreError::NotAProject(config_path));
        }
        debug!("Loading config snapshot from {}", config_path.display());
        let raw = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the snapshot under `project_dir` as pretty-printed JSON with a
    /// trailing newline.
    pub fn save(&self, project_dir: &Path) -> CoreResult<()> {
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        let mut raw = serde_json::to_string_pretty(self)?;
        raw.push('\n');
        fs::write(&config_path, raw)?;
        Ok(())
    }

    /// The platform this project was generated for.
    pub fn resolve_platform(&self) -> CoreResult<Platform> {
        Ok(Platform::from_str(&self.platform)?)
    }

    /// Reconstruct the render context for re-rendering templates.
    pub fn context(&self) -> RenderContext {
        RenderContext {
            project_name: self.project_name.clone(),
            python_version: self.python_version.clone(),
            django_version: self.django_version.clone(),
            drf_version: self.drf_version.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            platform: self.platform.clone(),
        }
    }
}
