//! Repository host error types.

use thiserror::Error;

/// Errors that can occur while talking to the repository host.
#[derive(Debug, Error)]
pub enum HostError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The requested file does not exist.
    #[error("'{path}' not found in {repository}")]
    NotFound { repository: String, path: String },

    /// The file exists but its content could not be retrieved.
    #[error("Failed to download '{path}' from {repository}: {message}")]
    Transport {
        repository: String,
        path: String,
        message: String,
    },

    /// The path resolves to more than one entry.
    #[error("'{path}' in {repository} resolves to {count} entries")]
    MultipleMatches {
        repository: String,
        path: String,
        count: usize,
    },
}
