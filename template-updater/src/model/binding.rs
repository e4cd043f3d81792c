//! Template binding file (`.cruft.json`) deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key of the context section holding the values the template was rendered with.
pub const COOKIECUTTER_CONTEXT_KEY: &str = "cookiecutter";

/// Errors that can occur while reading a binding file.
#[derive(Debug, Error)]
pub enum BindingError {
    /// The file is not valid JSON or does not match the expected layout.
    #[error("Failed to parse binding file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is present but empty.
    #[error("Binding file field '{field}' is empty")]
    EmptyField { field: &'static str },
}

/// Links a repository to the template revision and context it was generated from.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TemplateBinding {
    /// Location of the template repository.
    pub template: String,

    /// Template commit the repository was last synchronized against.
    pub commit: String,

    /// Tracked template branch or ref, if not the default branch.
    #[serde(default)]
    pub checkout: Option<String>,

    /// Values the template was rendered with.
    #[serde(default)]
    pub context: Map<String, Value>,

    /// Subdirectory of the template repository holding the template.
    #[serde(default)]
    pub directory: Option<String>,
}

impl TemplateBinding {
    /// Parses and validates the raw contents of a binding file.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError`] if the content is not a valid binding or
    /// `template`/`commit` are empty.
    pub fn parse(content: &[u8]) -> Result<Self, BindingError> {
        let binding: Self = serde_json::from_slice(content)?;

        if binding.template.trim().is_empty() {
            return Err(BindingError::EmptyField { field: "template" });
        }
        if binding.commit.trim().is_empty() {
            return Err(BindingError::EmptyField { field: "commit" });
        }

        Ok(binding)
    }

    /// Returns the tracked template branch, falling back to `default_branch`.
    #[must_use]
    pub fn template_branch<'a>(&'a self, default_branch: &'a str) -> &'a str {
        self.checkout
            .as_deref()
            .filter(|checkout| !checkout.is_empty())
            .unwrap_or(default_branch)
    }

    /// Resolves the maintainer from the template context.
    ///
    /// Candidates are tried in order and the first one present in
    /// `context["cookiecutter"]` with a string value wins. Returns `None` if
    /// no candidate matches.
    #[must_use]
    pub fn maintainer<S: AsRef<str>>(&self, candidates: &[S]) -> Option<String> {
        let cookiecutter = self.context.get(COOKIECUTTER_CONTEXT_KEY)?.as_object()?;

        candidates
            .iter()
            .find_map(|field| cookiecutter.get(field.as_ref()).and_then(Value::as_str))
            .map(str::to_owned)
    }
}
