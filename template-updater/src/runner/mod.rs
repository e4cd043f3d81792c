//! Orchestrates template sync runs over an organization.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::classifier::{Classification, Classifier};
use crate::host::{GitHubHost, RepoHandle, RepositoryHost};
use crate::model::Status;
use crate::pull_requests::create_update_pr;
use crate::summary::{ProcessingResult, RunSummary};
use crate::sync::{CruftCli, TemplateSyncEngine};
use crate::templates::TemplateRenderer;
use crate::vcs::{GitCli, VersionControl};
use tracing::{error, info, info_span, Instrument};

/// The external systems a run talks to.
#[derive(Debug)]
pub struct Collaborators<H, V, S> {
    /// Repository hosting service.
    pub host: H,
    /// Version control for local working copies.
    pub vcs: V,
    /// Template sync tool.
    pub sync: S,
}

/// Orchestrates a full classification and update run.
pub struct Runner<H, V, S> {
    config: RunnerConfig,
    collaborators: Collaborators<H, V, S>,
    renderer: TemplateRenderer,
}

impl Runner<GitHubHost, GitCli, CruftCli> {
    /// Builds a runner talking to GitHub, git and cruft.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Host`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let host = GitHubHost::new(config.token())?;
        let vcs = GitCli::new(config.settings().commit_author.clone());
        Ok(Self::with_collaborators(config, host, vcs, CruftCli::default()))
    }
}

impl<H, V, S> Runner<H, V, S>
where
    H: RepositoryHost,
    V: VersionControl,
    S: TemplateSyncEngine,
{
    /// Builds a runner from explicit collaborators.
    pub fn with_collaborators(config: RunnerConfig, host: H, vcs: V, sync: S) -> Self {
        Self {
            config,
            collaborators: Collaborators { host, vcs, sync },
            renderer: TemplateRenderer::new(),
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Returns the repository host.
    pub fn host(&self) -> &H {
        &self.collaborators.host
    }

    /// Returns the version control collaborator.
    pub fn vcs(&self) -> &V {
        &self.collaborators.vcs
    }

    /// Returns the template sync engine.
    pub fn sync(&self) -> &S {
        &self.collaborators.sync
    }

    /// Executes the full run.
    ///
    /// Repositories are processed one at a time, in the order the host
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the repositories cannot be listed, or the first
    /// error raised while processing a repository. Results gathered before
    /// the failure are discarded.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let organization = self.config.organization();
        info!(organization = %organization, "Listing repositories");

        let repositories = self
            .collaborators
            .host
            .list_repositories(organization)
            .await?;
        info!(count = repositories.len(), "Found repositories");

        let mut summary = RunSummary::new();
        for repo in &repositories {
            let span = info_span!("repository", repo = %repo.full_name());
            let result = self
                .process_repository(repo)
                .instrument(span)
                .await
                .map_err(|e| {
                    error!(repo = %repo.full_name(), error = %e, "Aborting run");
                    RunnerError::Repository {
                        repository: repo.full_name(),
                        source: Box::new(e),
                    }
                })?;
            summary.record_result(result);
        }

        info!(
            projects = summary.total_projects(),
            outdated = summary.outdated_projects(),
            skipped = summary.skipped_projects.len(),
            "Run complete"
        );
        Ok(summary)
    }

    /// Classifies a repository and opens an update pull request if it is outdated.
    async fn process_repository(&self, repo: &RepoHandle) -> Result<ProcessingResult, RunnerError> {
        let classifier = Classifier::new(&self.collaborators, &self.config);

        let result = match classifier.classify(repo).await? {
            Classification::Skipped(skipped) => ProcessingResult::Skipped(skipped),
            Classification::ExistingPr(project) | Classification::UpToDate(project) => {
                ProcessingResult::Project(project)
            }
            Classification::Outdated { project, workspace } => {
                let pull_request = create_update_pr(
                    &self.collaborators,
                    &self.config,
                    &self.renderer,
                    repo,
                    &project,
                    &workspace,
                )
                .await?;
                ProcessingResult::Project(
                    project.with_status(Status::UpdatedThisRun { pull_request }),
                )
            }
        };

        Ok(result)
    }
}
