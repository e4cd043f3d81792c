//! Projects grouped by maintainer.

use super::ReportRenderer;
use crate::model::{Project, Status};
use crate::summary::RunSummary;
use console::Style;
use std::fmt::Write;

/// Label column width, so values line up.
const LABEL_WIDTH: usize = 17;

pub(super) fn render(renderer: &ReportRenderer, summary: &RunSummary) -> String {
    let mut out = format!(
        "Projects: {}   Outdated: {}   Up to date: {}\n",
        summary.total_projects(),
        summary.outdated_projects(),
        summary.up_to_date_projects()
    );

    for (maintainer, projects) in group_by_maintainer(&summary.projects) {
        let all_up_to_date = projects.iter().all(|project| project.status.is_up_to_date());
        let maintainer_style = renderer.style(if all_up_to_date {
            Style::new().green()
        } else {
            Style::new().red()
        });

        out.push('\n');
        let _ = writeln!(
            out,
            "{}",
            maintainer_style.apply_to(maintainer.unwrap_or("None")).bold()
        );

        for project in projects {
            render_project(renderer, project, &mut out);
        }
    }

    out
}

fn render_project(renderer: &ReportRenderer, project: &Project, out: &mut String) {
    let status_style = renderer.style(match project.status {
        Status::UpToDate => Style::new().green(),
        Status::UpdatedThisRun { .. } => Style::new().yellow(),
        Status::ExistingPr { .. } => Style::new().red(),
    });
    let plain = renderer.style(Style::new());

    line(out, &plain, "Project:", &project.name);
    line(out, &plain, "URL:", &project.url);
    line(out, &status_style, "Status:", &status_text(renderer, &project.status));
    if let Some(pull_request) = project.pull_request() {
        line(out, &status_style, "Pull request:", &pull_request.url);
    }
    line(out, &plain, "Default branch:", &project.default_branch);
    line(out, &plain, "Template URL:", &project.template_url);
    line(out, &plain, "Template branch:", &project.template_branch);
    out.push('\n');
}

fn line(out: &mut String, style: &Style, label: &str, value: &str) {
    let text = format!("{label:<LABEL_WIDTH$}{value}");
    let _ = writeln!(out, "  {}", style.apply_to(text));
}

fn status_text(renderer: &ReportRenderer, status: &Status) -> String {
    match status {
        Status::ExistingPr { pull_request } => {
            let days_open = (renderer.now - pull_request.created_at).num_days();
            format!(
                "Existing PR since {} ({days_open} days)",
                pull_request.created_at.format("%Y-%m-%d")
            )
        }
        _ => status.label().to_string(),
    }
}

/// Groups projects by maintainer. Named maintainers come first in
/// lexicographic order, projects without one last. Within a group the
/// summary order is kept.
fn group_by_maintainer(projects: &[Project]) -> Vec<(Option<&str>, Vec<&Project>)> {
    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by(|a, b| match (&a.maintainer, &b.maintainer) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let mut groups: Vec<(Option<&str>, Vec<&Project>)> = Vec::new();
    for project in sorted {
        let maintainer = project.maintainer.as_deref();
        match groups.last_mut() {
            Some((current, members)) if *current == maintainer => members.push(project),
            _ => groups.push((maintainer, vec![project])),
        }
    }
    groups
}
