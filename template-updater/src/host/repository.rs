//! Repository and pull request information exchanged with the host.

use chrono::{DateTime, Utc};

/// A repository of the audited organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Canonical web URL.
    pub url: String,

    /// Default branch name (e.g., "main").
    pub default_branch: String,

    /// Whether the repository is archived.
    pub archived: bool,

    /// URL to clone the repository from.
    pub clone_url: String,
}

impl RepoHandle {
    /// Returns the repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// An open pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPullRequest {
    /// Pull request title.
    pub title: String,

    /// Web URL of the pull request.
    pub url: String,

    /// When the pull request was opened.
    pub created_at: DateTime<Utc>,
}

/// A pull request to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    /// Branch the changes are merged into.
    pub base: String,

    /// Branch holding the changes.
    pub head: String,

    /// Pull request title.
    pub title: String,

    /// Pull request body (markdown).
    pub body: String,
}
