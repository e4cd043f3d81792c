//! Repositories excluded from classification.

use serde::{Serialize, Serializer};
use std::fmt;

/// Why a repository was excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The repository is archived.
    Archived,

    /// The repository has no binding file.
    MissingBinding,

    /// The binding file exists but could not be downloaded or parsed.
    UnreadableBinding,

    /// Any other cause.
    Other(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archived => f.write_str("Project archived"),
            Self::MissingBinding => f.write_str("No binding file"),
            Self::UnreadableBinding => f.write_str("Cannot download binding file"),
            Self::Other(reason) => f.write_str(reason),
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A repository that was not classified, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedProject {
    /// Repository name.
    pub name: String,

    /// Canonical web URL of the repository.
    pub url: String,

    /// Why the repository was skipped.
    pub reason: SkipReason,
}
