//! Access to the repository hosting service.
//!
//! [`RepositoryHost`] is everything the updater needs from the host;
//! [`GitHubHost`] implements it with octocrab.

mod error;
mod github;
mod rate_limit;
mod repository;

pub use error::HostError;
pub use github::GitHubHost;
pub use repository::{NewPullRequest, OpenPullRequest, RepoHandle};

use crate::model::PullRequestRef;
use async_trait::async_trait;

/// Trait abstracting the repository hosting service for testability.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists every repository of `organization`, in the host's order.
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepoHandle>, HostError>;

    /// Reads a file from the default branch of `repo`.
    ///
    /// Fails with [`HostError::NotFound`] if the file is absent,
    /// [`HostError::MultipleMatches`] if `path` resolves to several entries,
    /// and [`HostError::Transport`] if the content cannot be retrieved.
    async fn read_file(&self, repo: &RepoHandle, path: &str) -> Result<Vec<u8>, HostError>;

    /// Lists the open pull requests of `repo`.
    async fn list_open_pull_requests(
        &self,
        repo: &RepoHandle,
    ) -> Result<Vec<OpenPullRequest>, HostError>;

    /// Opens a pull request on `repo`.
    async fn create_pull_request(
        &self,
        repo: &RepoHandle,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequestRef, HostError>;
}
