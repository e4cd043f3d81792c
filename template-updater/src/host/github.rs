//! [`RepositoryHost`] implementation for GitHub.

use super::rate_limit::ensure_core_rate_limit;
use super::{HostError, NewPullRequest, OpenPullRequest, RepoHandle, RepositoryHost};
use crate::model::PullRequestRef;
use async_trait::async_trait;
use chrono::Utc;
use octocrab::models::pulls::PullRequest;
use octocrab::models::Repository;
use octocrab::params::State;
use octocrab::Octocrab;
use tracing::{debug, info_span, Instrument};

/// Results per page for list endpoints.
const RESULTS_PER_PAGE: u8 = 100;

/// HTTP status GitHub answers with for missing content.
const NOT_FOUND: u16 = 404;

/// GitHub-backed repository host.
#[derive(Debug, Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Builds an authenticated client from a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::GitHubError`] if the client cannot be built.
    pub fn new(token: &str) -> Result<Self, HostError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    /// Wraps an already configured client.
    pub fn from_client(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl RepositoryHost for GitHubHost {
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepoHandle>, HostError> {
        async {
            ensure_core_rate_limit(&self.octocrab).await?;
            let first_page = self
                .octocrab
                .orgs(organization)
                .list_repos()
                .per_page(RESULTS_PER_PAGE)
                .send()
                .await?;
            let repositories = self.octocrab.all_pages(first_page).await?;

            debug!(count = repositories.len(), "Listed repositories");
            Ok(repositories
                .into_iter()
                .map(|repository| to_repo_handle(organization, repository))
                .collect())
        }
        .instrument(info_span!("list_repositories", organization))
        .await
    }

    async fn read_file(&self, repo: &RepoHandle, path: &str) -> Result<Vec<u8>, HostError> {
        let transport = |message: String| HostError::Transport {
            repository: repo.full_name(),
            path: path.to_string(),
            message,
        };

        ensure_core_rate_limit(&self.octocrab)
            .await
            .map_err(|e| transport(e.to_string()))?;

        let response = self
            .octocrab
            .repos(&repo.owner, &repo.name)
            .get_content()
            .path(path)
            .send()
            .await;

        let mut contents = match response {
            Ok(contents) => contents,
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code.as_u16() == NOT_FOUND =>
            {
                return Err(HostError::NotFound {
                    repository: repo.full_name(),
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(transport(e.to_string())),
        };

        if contents.items.len() > 1 {
            return Err(HostError::MultipleMatches {
                repository: repo.full_name(),
                path: path.to_string(),
                count: contents.items.len(),
            });
        }

        let item = contents.items.pop().ok_or_else(|| HostError::NotFound {
            repository: repo.full_name(),
            path: path.to_string(),
        })?;

        item.decoded_content()
            .map(String::into_bytes)
            .ok_or_else(|| transport("response did not include decodable content".to_string()))
    }

    async fn list_open_pull_requests(
        &self,
        repo: &RepoHandle,
    ) -> Result<Vec<OpenPullRequest>, HostError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        let first_page = self
            .octocrab
            .pulls(&repo.owner, &repo.name)
            .list()
            .state(State::Open)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;
        let pulls = self.octocrab.all_pages(first_page).await?;

        Ok(pulls
            .into_iter()
            .map(|pull| {
                let (url, created_at) = pull_request_location(repo, &pull);
                OpenPullRequest {
                    title: pull.title.unwrap_or_default(),
                    url,
                    created_at,
                }
            })
            .collect())
    }

    async fn create_pull_request(
        &self,
        repo: &RepoHandle,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequestRef, HostError> {
        ensure_core_rate_limit(&self.octocrab).await?;
        let created = self
            .octocrab
            .pulls(&repo.owner, &repo.name)
            .create(&pull_request.title, &pull_request.head, &pull_request.base)
            .body(&pull_request.body)
            .send()
            .await?;

        let (url, created_at) = pull_request_location(repo, &created);
        Ok(PullRequestRef { url, created_at })
    }
}

/// Converts an API repository into a handle.
fn to_repo_handle(organization: &str, repository: Repository) -> RepoHandle {
    let owner = repository
        .owner
        .as_ref()
        .map_or_else(|| organization.to_string(), |owner| owner.login.clone());
    let url = repository.html_url.as_ref().map_or_else(
        || format!("https://github.com/{owner}/{}", repository.name),
        ToString::to_string,
    );
    let clone_url = repository
        .clone_url
        .as_ref()
        .map_or_else(|| format!("{url}.git"), ToString::to_string);

    RepoHandle {
        owner,
        name: repository.name,
        url,
        default_branch: repository
            .default_branch
            .unwrap_or_else(|| "main".to_string()),
        archived: repository.archived.unwrap_or(false),
        clone_url,
    }
}

/// Returns the web URL and creation time of a pull request.
fn pull_request_location(
    repo: &RepoHandle,
    pull: &PullRequest,
) -> (String, chrono::DateTime<Utc>) {
    let url = pull.html_url.as_ref().map_or_else(
        || format!("{}/pull/{}", repo.url, pull.number),
        ToString::to_string,
    );
    // Only missing in partial API payloads.
    let created_at = pull.created_at.unwrap_or_else(Utc::now);
    (url, created_at)
}
