//! Classified project record.

use super::status::{PullRequestRef, Status};
use serde::Serialize;

/// A repository maintained via a template, together with its sync status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Repository name.
    pub name: String,

    /// Canonical web URL of the repository.
    pub url: String,

    /// Maintainer resolved from the template context.
    pub maintainer: Option<String>,

    /// Default branch update pull requests target.
    pub default_branch: String,

    /// Location of the template repository.
    pub template_url: String,

    /// Tracked template branch.
    pub template_branch: String,

    /// Template commit the repository was last synchronized against.
    pub old_template_commit: String,

    /// Sync status.
    #[serde(flatten)]
    pub status: Status,
}

impl Project {
    /// Returns a copy of this project with the status replaced.
    #[must_use]
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Returns the update pull request, if any.
    #[must_use]
    pub fn pull_request(&self) -> Option<&PullRequestRef> {
        self.status.pull_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn with_status_only_replaces_status() {
        let project = Project {
            name: "repo".to_string(),
            url: "https://github.com/org/repo".to_string(),
            maintainer: Some("Some Maintainer".to_string()),
            default_branch: "main".to_string(),
            template_url: "https://github.com/org/tpl".to_string(),
            template_branch: "dev".to_string(),
            old_template_commit: "abc".to_string(),
            status: Status::UpToDate,
        };
        let pull_request = PullRequestRef {
            url: "https://github.com/org/repo/pull/1".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };

        let updated = project.clone().with_status(Status::UpdatedThisRun {
            pull_request: pull_request.clone(),
        });

        assert_eq!(updated.pull_request(), Some(&pull_request));
        assert_eq!(updated.name, project.name);
        assert_eq!(updated.template_branch, project.template_branch);
        assert!(project.status.is_up_to_date());
    }
}
