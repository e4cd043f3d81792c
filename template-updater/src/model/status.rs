//! Template sync status of a project.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Reference to a template update pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRef {
    /// Web URL of the pull request.
    pub url: String,

    /// When the pull request was opened.
    pub created_at: DateTime<Utc>,
}

/// Terminal status of a classified project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    /// The project matches the tracked template state.
    UpToDate,

    /// A template update pull request was opened during this run.
    UpdatedThisRun {
        /// The newly opened pull request.
        pull_request: PullRequestRef,
    },

    /// A template update pull request was already open.
    ExistingPr {
        /// The pull request found open.
        pull_request: PullRequestRef,
    },
}

impl Status {
    /// Returns the human-readable label of the status.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpToDate => "Up to date",
            Self::UpdatedThisRun { .. } => "Updated this run",
            Self::ExistingPr { .. } => "Existing PR",
        }
    }

    /// Returns the associated pull request, present for every status except
    /// [`Status::UpToDate`].
    #[must_use]
    pub fn pull_request(&self) -> Option<&PullRequestRef> {
        match self {
            Self::UpToDate => None,
            Self::UpdatedThisRun { pull_request } | Self::ExistingPr { pull_request } => {
                Some(pull_request)
            }
        }
    }

    /// Returns true if the project needs no template update.
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }
}
