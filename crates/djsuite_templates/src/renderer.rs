//! Template rendering.
//!
//! Two render modes, selected by the `.j2` suffix convention:
//!
//! - templated sources run through minijinja with strict variable resolution
//!   (an undefined variable fails the render instead of substituting blank)
//!   and trailing-newline preservation
//! - everything else is verbatim passthrough, which is what keeps GitHub
//!   Actions' own `${{ }}` interpolation syntax in static workflow files
//!   untouched

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::debug;

use crate::context::RenderContext;
use crate::error::{TemplateError, TemplateResult};
use crate::manifest::ManifestEntry;

/// Renderer for manifest entries.
pub struct Renderer {
    env: Environment<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with a strict-undefined minijinja environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        // Outputs are config files and source code, never HTML
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Render one manifest entry with the given context.
    ///
    /// `.j2` sources are rendered; static sources are returned verbatim.
    pub fn render(&self, entry: &ManifestEntry, context: &RenderContext) -> TemplateResult<String> {
        if entry.is_templated() {
            debug!("Rendering template {}", entry.template_id());
            self.env
                .render_str(entry.source, context)
                .map_err(|source| TemplateError::RenderingFailed {
                    template: entry.template_id(),
                    source,
                })
        } else {
            debug!("Copying static source {}", entry.template_id());
            Ok(entry.source.to_string())
        }
    }

    /// Render every manifest entry, fail-fast.
    ///
    /// Entries do not depend on each other's output, so rendering order is
    /// irrelevant; a single failure aborts the batch with no partial result.
    pub fn render_all(
        &self,
        manifest: &[ManifestEntry],
        context: &RenderContext,
    ) -> TemplateResult<BTreeMap<String, String>> {
        let mut rendered = BTreeMap::new();
        for entry in manifest {
            rendered.insert(entry.output_path.to_string(), self.render(entry, context)?);
        }
        Ok(rendered)
    }
}
