//! Error types for manifest and rendering operations.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during manifest resolution or rendering.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown platform: {value:?}. Choose from: {choices:?}")]
    UnknownPlatform { value: String, choices: Vec<&'static str> },

    #[error("Manifest integrity failure: output path {output_path:?} is produced by both {first:?} and {second:?}")]
    DuplicateOutputPath {
        output_path: String,
        first: String,
        second: String,
    },

    #[error("Template rendering failed for {template}: {source}")]
    RenderingFailed {
        template: String,
        #[source]
        source: minijinja::Error,
    },
}
