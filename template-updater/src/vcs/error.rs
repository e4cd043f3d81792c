//! Version control error types.

use thiserror::Error;

/// Errors that can occur while running version control operations.
#[derive(Debug, Error)]
pub enum VcsError {
    /// The `git` executable could not be found.
    #[error("git is not installed or not in PATH")]
    GitNotInstalled,

    /// Spawning or waiting for the process failed.
    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// The command exited unsuccessfully.
    #[error("git {args} failed: {stderr}")]
    CommandFailed { args: String, stderr: String },

    /// The branch name is not a valid git reference name.
    #[error("Invalid branch name '{name}': {message}")]
    InvalidBranchName { name: String, message: String },
}
