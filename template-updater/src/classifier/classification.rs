//! Classification outcomes.

use crate::model::{Project, SkippedProject};
use crate::vcs::Workspace;

/// Outcome of classifying one repository.
#[derive(Debug)]
pub enum Classification {
    /// The repository was excluded.
    Skipped(SkippedProject),

    /// A template update pull request is already open.
    ExistingPr(Project),

    /// The repository matches the tracked template state.
    UpToDate(Project),

    /// The repository is behind its template and needs an update.
    Outdated {
        /// The project, still carrying its initial status.
        project: Project,
        /// The clone the template check ran in, reused for the update.
        workspace: Workspace,
    },
}
