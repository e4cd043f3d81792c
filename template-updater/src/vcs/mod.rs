//! Version control operations on local working copies.

mod error;
mod git;
mod workspace;

pub use error::VcsError;
pub use git::GitCli;
pub use workspace::Workspace;

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A cloned working copy on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepo {
    path: PathBuf,
}

impl LocalRepo {
    /// Wraps an existing working copy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the working directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A commit of a commit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Full commit id.
    pub id: String,

    /// Raw commit message.
    pub message: String,
}

/// Trait abstracting version control operations for testability.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Clones `url` into the empty directory `target`.
    async fn clone_repository(&self, url: &str, target: &Path) -> Result<LocalRepo, VcsError>;

    /// Creates a branch at the current commit and checks it out.
    async fn create_and_checkout_branch(&self, repo: &LocalRepo, name: &str)
        -> Result<(), VcsError>;

    /// Stages every change in the working tree, including deletions.
    async fn stage_all(&self, repo: &LocalRepo) -> Result<(), VcsError>;

    /// Commits the staged changes.
    async fn commit(&self, repo: &LocalRepo, message: &str) -> Result<(), VcsError>;

    /// Pushes `branch` to `remote` and sets it as upstream.
    async fn push(&self, repo: &LocalRepo, remote: &str, branch: &str) -> Result<(), VcsError>;

    /// Checks out an existing ref.
    async fn checkout(&self, repo: &LocalRepo, reference: &str) -> Result<(), VcsError>;

    /// Resolves a ref to its commit id.
    async fn resolve_ref(&self, repo: &LocalRepo, reference: &str) -> Result<String, VcsError>;

    /// Lists the commits reachable from `to_inclusive` but not from
    /// `from_exclusive`, oldest first.
    async fn commits_in_range(
        &self,
        repo: &LocalRepo,
        from_exclusive: &str,
        to_inclusive: &str,
    ) -> Result<Vec<CommitInfo>, VcsError>;
}
