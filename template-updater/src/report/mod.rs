//! Human-readable run report.
//!
//! Rendering is pure: the same summary, clock and colour choice always yield
//! the same text. The caller decides where it goes.

mod projects;
mod skipped;

use crate::summary::RunSummary;
use chrono::{DateTime, Utc};
use console::Style;

/// Renders a [`RunSummary`] as text.
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    now: DateTime<Utc>,
    colored: bool,
}

impl ReportRenderer {
    /// Creates a renderer computing ages relative to `now`.
    ///
    /// ANSI colours are emitted if and only if `colored` is set, regardless
    /// of whether the output is a terminal.
    #[must_use]
    pub fn new(now: DateTime<Utc>, colored: bool) -> Self {
        Self { now, colored }
    }

    /// Renders the full report: the project table followed by the skipped
    /// projects table. Empty sections are left out.
    #[must_use]
    pub fn render(&self, summary: &RunSummary) -> String {
        let mut sections = Vec::new();

        if !summary.projects.is_empty() {
            sections.push(projects::render(self, summary));
        }
        if !summary.skipped_projects.is_empty() {
            sections.push(skipped::render(&summary.skipped_projects));
        }

        sections.join("\n")
    }

    fn style(&self, style: Style) -> Style {
        style.force_styling(self.colored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Project, SkipReason, SkippedProject, Status};

    fn project(name: &str) -> Project {
        Project {
            name: name.to_string(),
            url: format!("https://{name}.com"),
            maintainer: None,
            default_branch: "main".to_string(),
            template_url: "https://template.com".to_string(),
            template_branch: "main".to_string(),
            old_template_commit: "abc123".to_string(),
            status: Status::UpToDate,
        }
    }

    #[test]
    fn empty_summary_renders_nothing() {
        let renderer = ReportRenderer::new(Utc::now(), false);
        assert_eq!(renderer.render(&RunSummary::new()), "");
    }

    #[test]
    fn renders_both_sections_in_order() {
        let summary = RunSummary {
            projects: vec![project("project-1")],
            skipped_projects: vec![SkippedProject {
                name: "archived".to_string(),
                url: "https://archived.com".to_string(),
                reason: SkipReason::Archived,
            }],
        };

        let report = ReportRenderer::new(Utc::now(), false).render(&summary);

        let projects_at = report.find("Projects: 1").unwrap();
        let skipped_at = report.find("Skipped projects: 1").unwrap();
        assert!(projects_at < skipped_at);
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let summary = RunSummary {
            projects: vec![project("project-1")],
            skipped_projects: Vec::new(),
        };

        let plain = ReportRenderer::new(Utc::now(), false).render(&summary);
        let colored = ReportRenderer::new(Utc::now(), true).render(&summary);

        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains('\u{1b}'));
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }
}
