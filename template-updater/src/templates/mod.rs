//! Text generation for template update commits and pull requests.
//!
//! Commit messages pulled in from the template repository are turned into a
//! pull request title and body. References like `(#123)` are rewritten to
//! point at the template repository, since hosts would otherwise resolve them
//! against the repository being updated.

mod error;
mod pull_request_text;
mod references;
mod renderer;

pub use error::TemplateError;
pub use pull_request_text::{build_pull_request_text, PullRequestText};
pub use references::rewrite_references;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

use chrono::NaiveDateTime;

/// Generates the branch name for an update pull request.
///
/// Format: `{prefix}{YYYY-MM-DD}T{HH-MM-SS}`. Colons are replaced by hyphens
/// so the name is a valid ref.
#[must_use]
pub fn generate_branch_name(prefix: &str, timestamp: NaiveDateTime) -> String {
    format!("{prefix}{}", timestamp.format("%Y-%m-%dT%H-%M-%S"))
}
