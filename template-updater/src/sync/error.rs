//! Template sync error types.

use thiserror::Error;

/// Errors that can occur while checking or applying template changes.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The sync tool could not be found.
    #[error("'{program}' is not installed or not in PATH")]
    NotInstalled { program: String },

    /// Spawning or waiting for the process failed.
    #[error("Failed to run '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool exited unsuccessfully.
    #[error("'{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}
