//! Ephemeral working copies.

use super::{LocalRepo, VcsError, VersionControl};
use std::path::Path;
use tempfile::TempDir;

/// A clone living in its own temporary directory.
///
/// The directory is removed when the workspace is dropped, on every exit path.
#[derive(Debug)]
pub struct Workspace {
    repo: LocalRepo,
    _dir: TempDir,
}

impl Workspace {
    /// Clones `url` into a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns [`VcsError`] if the directory cannot be created or the clone fails.
    pub async fn checkout<V: VersionControl + ?Sized>(
        vcs: &V,
        url: &str,
    ) -> Result<Self, VcsError> {
        let dir = tempfile::tempdir()?;
        let repo = vcs.clone_repository(url, dir.path()).await?;
        Ok(Self { repo, _dir: dir })
    }

    /// Returns the cloned repository.
    pub fn repo(&self) -> &LocalRepo {
        &self.repo
    }

    /// Returns the working directory.
    pub fn path(&self) -> &Path {
        self.repo.path()
    }
}
