//! Run summary types.

use super::result::ProcessingResult;
use crate::model::{Project, SkippedProject};
use serde::Serialize;

/// Summary of a complete run.
///
/// Both lists keep the order in which repositories were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Classified projects.
    pub projects: Vec<Project>,

    /// Repositories excluded from classification.
    pub skipped_projects: Vec<SkippedProject>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        match result {
            ProcessingResult::Project(project) => self.projects.push(project),
            ProcessingResult::Skipped(skipped) => self.skipped_projects.push(skipped),
        }
    }

    /// Returns the number of classified projects.
    #[must_use]
    pub fn total_projects(&self) -> usize {
        self.projects.len()
    }

    /// Returns the number of projects already matching their template.
    #[must_use]
    pub fn up_to_date_projects(&self) -> usize {
        self.projects
            .iter()
            .filter(|project| project.status.is_up_to_date())
            .count()
    }

    /// Returns the number of projects behind their template.
    #[must_use]
    pub fn outdated_projects(&self) -> usize {
        self.total_projects() - self.up_to_date_projects()
    }
}
