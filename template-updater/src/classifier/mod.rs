//! Per-repository template sync classification.
//!
//! Guards are evaluated in a fixed order and the first match wins:
//!
//! 1. archived repositories are skipped
//! 2. repositories without a binding file are skipped
//! 3. repositories whose binding file cannot be read are skipped
//! 4. an ambiguous binding file path aborts the run
//! 5. an open pull request with a recognized title means an update is pending
//! 6. the sync engine decides between up to date and outdated

mod classification;

pub use classification::Classification;

use crate::host::{HostError, RepoHandle, RepositoryHost};
use crate::model::{Project, PullRequestRef, SkipReason, SkippedProject, Status, TemplateBinding};
use crate::runner::{Collaborators, RunnerConfig, RunnerError};
use crate::sync::TemplateSyncEngine;
use crate::urls::authenticated_clone_url;
use crate::vcs::{VersionControl, Workspace};
use tracing::{debug, info, warn};

/// Result of looking up the binding file.
enum BindingLookup {
    Found(TemplateBinding),
    Skip(SkipReason),
}

/// Classifies repositories using the run's collaborators.
pub struct Classifier<'a, H, V, S> {
    collaborators: &'a Collaborators<H, V, S>,
    config: &'a RunnerConfig,
}

impl<'a, H, V, S> Classifier<'a, H, V, S>
where
    H: RepositoryHost,
    V: VersionControl,
    S: TemplateSyncEngine,
{
    /// Creates a classifier.
    pub fn new(collaborators: &'a Collaborators<H, V, S>, config: &'a RunnerConfig) -> Self {
        Self {
            collaborators,
            config,
        }
    }

    /// Classifies one repository.
    ///
    /// Nothing is mutated: at most the repository is cloned into an ephemeral
    /// workspace so the sync engine can compare it against the template.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::AmbiguousBindingFile`] if the binding file path
    /// is ambiguous, or any collaborator error past the binding lookup.
    pub async fn classify(&self, repo: &RepoHandle) -> Result<Classification, RunnerError> {
        if repo.archived {
            info!(repo = %repo.name, "Skipped, project archived");
            return Ok(skipped(repo, SkipReason::Archived));
        }

        let binding = match self.read_binding(repo).await? {
            BindingLookup::Found(binding) => binding,
            BindingLookup::Skip(reason) => return Ok(skipped(repo, reason)),
        };

        let settings = self.config.settings();
        let project = Project {
            name: repo.name.clone(),
            url: repo.url.clone(),
            maintainer: binding.maintainer(&settings.maintainer_fields),
            default_branch: repo.default_branch.clone(),
            template_url: binding.template.clone(),
            template_branch: binding
                .template_branch(&settings.default_template_branch)
                .to_string(),
            old_template_commit: binding.commit.clone(),
            status: Status::UpToDate,
        };

        if let Some(pull_request) = self.find_existing_pull_request(repo).await? {
            info!(
                repo = %repo.name,
                url = %pull_request.url,
                "Skipped, project already has an active pull request for a template update"
            );
            return Ok(Classification::ExistingPr(
                project.with_status(Status::ExistingPr { pull_request }),
            ));
        }

        let clone_url = authenticated_clone_url(&repo.clone_url, self.config.token());
        let workspace = Workspace::checkout(&self.collaborators.vcs, &clone_url).await?;

        info!(repo = %repo.name, "Checking");
        let project_dir = workspace.path().join(settings.project_directory());
        let synced = self
            .collaborators
            .sync
            .check(&project_dir, &project.template_branch)
            .await?;

        if synced {
            debug!(repo = %repo.name, "Project is up to date");
            Ok(Classification::UpToDate(project))
        } else {
            debug!(repo = %repo.name, "Project is outdated");
            Ok(Classification::Outdated { project, workspace })
        }
    }

    /// Downloads and parses the binding file.
    async fn read_binding(&self, repo: &RepoHandle) -> Result<BindingLookup, RunnerError> {
        let path = &self.config.settings().binding_file;

        match self.collaborators.host.read_file(repo, path).await {
            Ok(content) => match TemplateBinding::parse(&content) {
                Ok(binding) => Ok(BindingLookup::Found(binding)),
                Err(e) => {
                    warn!(repo = %repo.name, path = %path, error = %e, "Skipped, binding file cannot be parsed");
                    Ok(BindingLookup::Skip(SkipReason::UnreadableBinding))
                }
            },
            Err(HostError::NotFound { .. }) => {
                info!(repo = %repo.name, path = %path, "Skipped, project does not have a binding file");
                Ok(BindingLookup::Skip(SkipReason::MissingBinding))
            }
            Err(HostError::MultipleMatches { count, .. }) => {
                Err(RunnerError::AmbiguousBindingFile {
                    repository: repo.name.clone(),
                    path: path.clone(),
                    count,
                })
            }
            Err(e) => {
                warn!(
                    repo = %repo.name,
                    path = %path,
                    error = %e,
                    "Skipped, failed to retrieve binding file although the project has one"
                );
                Ok(BindingLookup::Skip(SkipReason::UnreadableBinding))
            }
        }
    }

    /// Returns the first open pull request carrying a recognized update title.
    async fn find_existing_pull_request(
        &self,
        repo: &RepoHandle,
    ) -> Result<Option<PullRequestRef>, RunnerError> {
        let settings = self.config.settings();
        let pull_requests = self
            .collaborators
            .host
            .list_open_pull_requests(repo)
            .await?;

        Ok(pull_requests
            .into_iter()
            .find(|pull_request| {
                settings
                    .recognized_pr_titles()
                    .any(|title| title == pull_request.title)
            })
            .map(|pull_request| PullRequestRef {
                url: pull_request.url,
                created_at: pull_request.created_at,
            }))
    }
}

fn skipped(repo: &RepoHandle, reason: SkipReason) -> Classification {
    Classification::Skipped(SkippedProject {
        name: repo.name.clone(),
        url: repo.url.clone(),
        reason,
    })
}
