//! Runner error types.

use crate::config::ConfigError;
use crate::host::HostError;
use crate::sync::SyncError;
use crate::templates::TemplateError;
use crate::vcs::VcsError;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Neither a token argument nor the environment provided credentials.
    #[error("No access token provided")]
    MissingToken,

    /// The binding file path resolves to several files.
    #[error(
        "Repository '{repository}' contains more than one '{path}' file ({count} matches). \
         This layout is not supported."
    )]
    AmbiguousBindingFile {
        repository: String,
        path: String,
        count: usize,
    },

    /// Repository host errors.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Version control errors.
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// Template sync errors.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Pull request text rendering errors.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A failure while processing one repository.
    #[error("Failed to process '{repository}': {source}")]
    Repository {
        repository: String,
        #[source]
        source: Box<RunnerError>,
    },
}
