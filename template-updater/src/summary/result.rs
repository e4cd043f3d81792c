//! Processing result types.

use crate::model::{Project, SkippedProject};

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// The repository was classified.
    Project(Project),

    /// The repository was excluded from classification.
    Skipped(SkippedProject),
}
