//! # djsuite_templates
//!
//! Bundled template manifest and rendering for djsuite.
//!
//! This crate owns the fixed manifest mapping every bundled template source to
//! its output path and update group, and the renderer that turns manifest
//! entries into file contents:
//!
//! - `.j2` sources render through a strict-undefined minijinja environment
//! - everything else is copied byte-for-byte (verbatim passthrough)
//!
//! ## Example
//!
//! ```rust
//! use djsuite_templates::{get_manifest, Platform, RenderContext, Renderer};
//!
//! let manifest = get_manifest(Platform::AwsEb).unwrap();
//! let context = RenderContext {
//!     project_name: "myapp".into(),
//!     python_version: "3.12".into(),
//!     django_version: "5.2".into(),
//!     drf_version: "3.16".into(),
//!     author: "Jane".into(),
//!     description: "Demo".into(),
//!     platform: Platform::AwsEb.as_str().into(),
//! };
//!
//! let renderer = Renderer::new();
//! let rendered = renderer.render_all(&manifest, &context).unwrap();
//! assert_eq!(rendered.len(), manifest.len());
//! ```

pub mod context;
pub mod error;
pub mod manifest;
pub mod renderer;

pub use context::RenderContext;
pub use error::{TemplateError, TemplateResult};
pub use manifest::{
    all_output_paths, files_for_groups, get_manifest, ManifestEntry, Platform, UpdateGroup,
};
pub use renderer::Renderer;
