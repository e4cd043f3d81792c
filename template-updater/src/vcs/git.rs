//! [`VersionControl`] implementation on top of the `git` CLI.

use super::{CommitInfo, LocalRepo, VcsError, VersionControl};
use crate::config::CommitAuthor;
use crate::urls::redact_credentials;
use async_trait::async_trait;
use bstr::ByteSlice;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace, warn};

/// Version control backed by the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    author: CommitAuthor,
}

impl GitCli {
    /// Creates a client committing as `author`.
    pub fn new(author: CommitAuthor) -> Self {
        Self { author }
    }
}

#[async_trait]
impl VersionControl for GitCli {
    async fn clone_repository(&self, url: &str, target: &Path) -> Result<LocalRepo, VcsError> {
        debug!(url = %redact_credentials(url), target = %target.display(), "Cloning repository");
        let target_arg = target.to_string_lossy();
        run_git(None, &["clone", "--quiet", url, &target_arg]).await?;
        Ok(LocalRepo::new(target))
    }

    async fn create_and_checkout_branch(
        &self,
        repo: &LocalRepo,
        name: &str,
    ) -> Result<(), VcsError> {
        debug!(branch = %name, "Creating branch");
        validate_branch_name(name)?;
        run_git(Some(repo.path()), &["checkout", "-b", name]).await?;
        Ok(())
    }

    async fn stage_all(&self, repo: &LocalRepo) -> Result<(), VcsError> {
        run_git(Some(repo.path()), &["add", "--all"]).await?;
        Ok(())
    }

    async fn commit(&self, repo: &LocalRepo, message: &str) -> Result<(), VcsError> {
        debug!("Committing changes");
        let name = format!("user.name={}", self.author.name);
        let email = format!("user.email={}", self.author.email);
        run_git(
            Some(repo.path()),
            &[
                "-c",
                &name,
                "-c",
                &email,
                "commit",
                "--quiet",
                "--allow-empty-message",
                "-m",
                message,
            ],
        )
        .await?;
        Ok(())
    }

    async fn push(&self, repo: &LocalRepo, remote: &str, branch: &str) -> Result<(), VcsError> {
        debug!(remote, branch, "Pushing branch");
        run_git(
            Some(repo.path()),
            &["push", "--quiet", "--set-upstream", remote, branch],
        )
        .await?;
        Ok(())
    }

    async fn checkout(&self, repo: &LocalRepo, reference: &str) -> Result<(), VcsError> {
        run_git(Some(repo.path()), &["checkout", "--quiet", reference]).await?;
        Ok(())
    }

    async fn resolve_ref(&self, repo: &LocalRepo, reference: &str) -> Result<String, VcsError> {
        let revision = format!("{reference}^{{commit}}");
        run_git(Some(repo.path()), &["rev-parse", "--verify", &revision]).await
    }

    async fn commits_in_range(
        &self,
        repo: &LocalRepo,
        from_exclusive: &str,
        to_inclusive: &str,
    ) -> Result<Vec<CommitInfo>, VcsError> {
        let range = format!("{from_exclusive}..{to_inclusive}");
        let ids = run_git(Some(repo.path()), &["rev-list", "--reverse", &range]).await?;

        let mut commits = Vec::new();
        for id in ids.lines().filter(|line| !line.is_empty()) {
            let message = run_git(Some(repo.path()), &["log", "-1", "--format=%B", id]).await?;
            commits.push(CommitInfo {
                id: id.to_string(),
                message,
            });
        }

        debug!(range = %range, count = commits.len(), "Listed commits");
        Ok(commits)
    }
}

/// Rejects names git would refuse or misinterpret as something else.
fn validate_branch_name(name: &str) -> Result<(), VcsError> {
    gix_validate::reference::name_partial(name.as_bytes().as_bstr()).map_err(|e| {
        VcsError::InvalidBranchName {
            name: name.to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(())
}

/// Runs git, optionally inside `dir`, and returns trimmed stdout.
async fn run_git(dir: Option<&Path>, args: &[&str]) -> Result<String, VcsError> {
    let mut cmd = Command::new("git");
    if let Some(dir) = dir {
        cmd.arg("-C").arg(dir);
    }
    cmd.args(args)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let display_args = redact_credentials(&args.join(" "));
    trace!(args = %display_args, "running git command");

    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            warn!("git not found in PATH");
            VcsError::GitNotInstalled
        } else {
            VcsError::Io(e)
        }
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(VcsError::CommandFailed {
            args: display_args,
            stderr: redact_credentials(&stderr),
        })
    }
}
