//! In-memory collaborators for driving the runner without a network.
//!
//! Every fake records the calls it receives so tests can assert on what was
//! (and was not) done to each repository.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use template_updater::{
    CommitInfo, HostError, LocalRepo, NewPullRequest, OpenPullRequest, PullRequestRef,
    RepoHandle, RepositoryHost, SyncError, TemplateSyncEngine, UpdaterSettings, VcsError,
    VersionControl,
};

pub const ORGANIZATION: &str = "acme";
pub const TOKEN: &str = "test-token";
pub const TEMPLATE_URL: &str = "git@github.com:acme/python-template.git";

/// File the fake clone leaves behind so the fake sync engine knows which
/// repository a working directory belongs to.
const ORIGIN_MARKER: &str = ".fake-origin";

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn repo(name: &str) -> RepoHandle {
    RepoHandle {
        owner: ORGANIZATION.to_string(),
        name: name.to_string(),
        url: format!("https://github.com/{ORGANIZATION}/{name}"),
        default_branch: "main".to_string(),
        archived: false,
        clone_url: format!("https://github.com/{ORGANIZATION}/{name}.git"),
    }
}

pub fn archived_repo(name: &str) -> RepoHandle {
    RepoHandle {
        archived: true,
        ..repo(name)
    }
}

pub fn binding(checkout: Option<&str>, maintainer: Option<&str>) -> Vec<u8> {
    let mut context = serde_json::json!({ "project_name": "Example" });
    if let Some(maintainer) = maintainer {
        context["full_name"] = serde_json::Value::from(maintainer);
    }
    serde_json::to_vec(&serde_json::json!({
        "template": TEMPLATE_URL,
        "commit": "old-commit",
        "checkout": checkout,
        "context": { "cookiecutter": context },
        "directory": null,
    }))
    .unwrap()
}

pub fn opened_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap()
}

pub fn settings() -> UpdaterSettings {
    UpdaterSettings::default()
}

/// Repository name a clone URL points at.
fn repository_name(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default()
        .trim_end_matches(".git")
        .to_string()
}

// ---------------------------------------------------------------------------
// FakeHost
// ---------------------------------------------------------------------------

/// How the fake host answers a binding file request.
#[derive(Debug, Clone)]
pub enum FakeFile {
    Content(Vec<u8>),
    Transport,
    Ambiguous(usize),
}

#[derive(Debug, Default)]
pub struct FakeHost {
    repositories: Vec<RepoHandle>,
    files: HashMap<String, FakeFile>,
    open_pull_requests: Mutex<HashMap<String, Vec<OpenPullRequest>>>,
    created: Mutex<Vec<(String, NewPullRequest)>>,
    file_reads: Mutex<Vec<(String, String)>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, repo: RepoHandle, file: Option<FakeFile>) -> Self {
        if let Some(file) = file {
            self.files.insert(repo.name.clone(), file);
        }
        self.repositories.push(repo);
        self
    }

    pub fn with_open_pull_request(
        mut self,
        repo: &str,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let pull_requests = self
            .open_pull_requests
            .get_mut()
            .unwrap()
            .entry(repo.to_string())
            .or_default();
        let number = pull_requests.len() + 1;
        pull_requests.push(OpenPullRequest {
            title: title.to_string(),
            url: format!("https://github.com/{ORGANIZATION}/{repo}/pull/{number}"),
            created_at,
        });
        self
    }

    /// Pull requests opened during the run, with the repository they target.
    pub fn created(&self) -> Vec<(String, NewPullRequest)> {
        self.created.lock().unwrap().clone()
    }

    /// `(repository, path)` of every file read.
    pub fn file_reads(&self) -> Vec<(String, String)> {
        self.file_reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepoHandle>, HostError> {
        assert_eq!(organization, ORGANIZATION);
        Ok(self.repositories.clone())
    }

    async fn read_file(&self, repo: &RepoHandle, path: &str) -> Result<Vec<u8>, HostError> {
        self.file_reads
            .lock()
            .unwrap()
            .push((repo.name.clone(), path.to_string()));

        match self.files.get(&repo.name) {
            Some(FakeFile::Content(content)) => Ok(content.clone()),
            Some(FakeFile::Transport) => Err(HostError::Transport {
                repository: repo.full_name(),
                path: path.to_string(),
                message: "connection reset".to_string(),
            }),
            Some(FakeFile::Ambiguous(count)) => Err(HostError::MultipleMatches {
                repository: repo.full_name(),
                path: path.to_string(),
                count: *count,
            }),
            None => Err(HostError::NotFound {
                repository: repo.full_name(),
                path: path.to_string(),
            }),
        }
    }

    async fn list_open_pull_requests(
        &self,
        repo: &RepoHandle,
    ) -> Result<Vec<OpenPullRequest>, HostError> {
        Ok(self
            .open_pull_requests
            .lock()
            .unwrap()
            .get(&repo.name)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_pull_request(
        &self,
        repo: &RepoHandle,
        pull_request: &NewPullRequest,
    ) -> Result<PullRequestRef, HostError> {
        let mut created = self.created.lock().unwrap();
        created.push((repo.name.clone(), pull_request.clone()));
        let opened = PullRequestRef {
            url: format!("{}/pull/{}", repo.url, 100 + created.len()),
            created_at: opened_at(20),
        };

        // Later runs see the pull request as open.
        self.open_pull_requests
            .lock()
            .unwrap()
            .entry(repo.name.clone())
            .or_default()
            .push(OpenPullRequest {
                title: pull_request.title.clone(),
                url: opened.url.clone(),
                created_at: opened.created_at,
            });
        Ok(opened)
    }
}

// ---------------------------------------------------------------------------
// FakeVcs
// ---------------------------------------------------------------------------

/// A recorded version control call. Working copies are identified by the
/// name of the repository they were cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Clone { url: String },
    CreateBranch { repo: String, name: String },
    StageAll { repo: String },
    Commit { repo: String, message: String },
    Push { repo: String, remote: String, branch: String },
    Checkout { repo: String, reference: String },
    ResolveRef { repo: String, reference: String },
    CommitsInRange { repo: String, from: String, to: String },
}

#[derive(Debug, Default)]
pub struct FakeVcs {
    template_commits: Vec<String>,
    fail_push: bool,
    calls: Mutex<Vec<VcsCall>>,
    clone_targets: Mutex<Vec<PathBuf>>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages returned for every template commit range, oldest first.
    pub fn with_template_commits(mut self, messages: &[&str]) -> Self {
        self.template_commits = messages.iter().map(|m| (*m).to_string()).collect();
        self
    }

    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made against working copies of `repo`.
    pub fn calls_for(&self, repo: &str) -> Vec<VcsCall> {
        self.calls()
            .into_iter()
            .filter(|call| match call {
                VcsCall::Clone { url } => repository_name(url) == repo,
                VcsCall::CreateBranch { repo: r, .. }
                | VcsCall::StageAll { repo: r }
                | VcsCall::Commit { repo: r, .. }
                | VcsCall::Push { repo: r, .. }
                | VcsCall::Checkout { repo: r, .. }
                | VcsCall::ResolveRef { repo: r, .. }
                | VcsCall::CommitsInRange { repo: r, .. } => r == repo,
            })
            .collect()
    }

    pub fn clone_targets(&self) -> Vec<PathBuf> {
        self.clone_targets.lock().unwrap().clone()
    }

    fn record(&self, call: VcsCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn origin_of(repo: &LocalRepo) -> String {
    origin_of_dir(repo.path())
}

/// Finds the clone a directory belongs to by looking for the marker in it
/// and its ancestors.
fn origin_of_dir(dir: &Path) -> String {
    dir.ancestors()
        .find_map(|dir| std::fs::read_to_string(dir.join(ORIGIN_MARKER)).ok())
        .map(|url| repository_name(&url))
        .unwrap_or_default()
}

#[async_trait]
impl VersionControl for FakeVcs {
    async fn clone_repository(&self, url: &str, target: &Path) -> Result<LocalRepo, VcsError> {
        std::fs::write(target.join(ORIGIN_MARKER), url)?;
        self.clone_targets.lock().unwrap().push(target.to_path_buf());
        self.record(VcsCall::Clone {
            url: url.to_string(),
        });
        Ok(LocalRepo::new(target))
    }

    async fn create_and_checkout_branch(
        &self,
        repo: &LocalRepo,
        name: &str,
    ) -> Result<(), VcsError> {
        self.record(VcsCall::CreateBranch {
            repo: origin_of(repo),
            name: name.to_string(),
        });
        Ok(())
    }

    async fn stage_all(&self, repo: &LocalRepo) -> Result<(), VcsError> {
        self.record(VcsCall::StageAll {
            repo: origin_of(repo),
        });
        Ok(())
    }

    async fn commit(&self, repo: &LocalRepo, message: &str) -> Result<(), VcsError> {
        self.record(VcsCall::Commit {
            repo: origin_of(repo),
            message: message.to_string(),
        });
        Ok(())
    }

    async fn push(&self, repo: &LocalRepo, remote: &str, branch: &str) -> Result<(), VcsError> {
        self.record(VcsCall::Push {
            repo: origin_of(repo),
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        if self.fail_push {
            return Err(VcsError::CommandFailed {
                args: format!("push --set-upstream {remote} {branch}"),
                stderr: "remote rejected".to_string(),
            });
        }
        Ok(())
    }

    async fn checkout(&self, repo: &LocalRepo, reference: &str) -> Result<(), VcsError> {
        self.record(VcsCall::Checkout {
            repo: origin_of(repo),
            reference: reference.to_string(),
        });
        Ok(())
    }

    async fn resolve_ref(&self, repo: &LocalRepo, reference: &str) -> Result<String, VcsError> {
        self.record(VcsCall::ResolveRef {
            repo: origin_of(repo),
            reference: reference.to_string(),
        });
        Ok("new-commit".to_string())
    }

    async fn commits_in_range(
        &self,
        repo: &LocalRepo,
        from_exclusive: &str,
        to_inclusive: &str,
    ) -> Result<Vec<CommitInfo>, VcsError> {
        self.record(VcsCall::CommitsInRange {
            repo: origin_of(repo),
            from: from_exclusive.to_string(),
            to: to_inclusive.to_string(),
        });
        Ok(self
            .template_commits
            .iter()
            .enumerate()
            .map(|(index, message)| CommitInfo {
                id: format!("commit-{index}"),
                message: message.clone(),
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// FakeSync
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCall {
    Check { repo: String, template_ref: String },
    Apply { repo: String, template_ref: String },
}

/// Sync engine reporting every repository as up to date unless listed as
/// outdated.
#[derive(Debug, Default)]
pub struct FakeSync {
    outdated: Vec<String>,
    calls: Mutex<Vec<SyncCall>>,
    working_dirs: Mutex<Vec<PathBuf>>,
}

impl FakeSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outdated(mut self, repo: &str) -> Self {
        self.outdated.push(repo.to_string());
        self
    }

    pub fn calls(&self) -> Vec<SyncCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Directories `check` and `apply` ran in, in call order.
    pub fn working_dirs(&self) -> Vec<PathBuf> {
        self.working_dirs.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplateSyncEngine for FakeSync {
    async fn check(&self, working_dir: &Path, template_ref: &str) -> Result<bool, SyncError> {
        self.working_dirs
            .lock()
            .unwrap()
            .push(working_dir.to_path_buf());
        let repo = origin_of_dir(working_dir);
        let synced = !self.outdated.contains(&repo);
        self.calls.lock().unwrap().push(SyncCall::Check {
            repo,
            template_ref: template_ref.to_string(),
        });
        Ok(synced)
    }

    async fn apply(&self, working_dir: &Path, template_ref: &str) -> Result<(), SyncError> {
        self.working_dirs
            .lock()
            .unwrap()
            .push(working_dir.to_path_buf());
        self.calls.lock().unwrap().push(SyncCall::Apply {
            repo: origin_of_dir(working_dir),
            template_ref: template_ref.to_string(),
        });
        Ok(())
    }
}
