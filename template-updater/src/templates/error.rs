//! Pull request text rendering errors.

/// Failure to render a configurable part of the pull request text.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template does not compile or references a missing variable.
    #[error("Failed to render pull request text: {0}")]
    RenderError(#[from] handlebars::RenderError),
}
