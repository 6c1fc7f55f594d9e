//! Render context passed to every templated source.

use serde::{Deserialize, Serialize};

/// The flat variable set supplied to template rendering.
///
/// Every variable any `.j2` template references must be present here; the
/// renderer runs in strict-undefined mode and fails on missing variables
/// rather than substituting an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// Project name, a valid Python identifier.
    pub project_name: String,
    /// Python version string (e.g. "3.12").
    pub python_version: String,
    /// Django version string (e.g. "5.2").
    pub django_version: String,
    /// Django REST framework version string (e.g. "3.16").
    pub drf_version: String,
    /// Author name recorded in project metadata.
    pub author: String,
    /// Free-form project description.
    pub description: String,
    /// Canonical platform string (e.g. "aws-eb").
    pub platform: String,
}
