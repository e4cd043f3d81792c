//! Applying template updates and publishing them as pull requests.

use crate::host::{NewPullRequest, RepoHandle, RepositoryHost};
use crate::model::{Project, PullRequestRef};
use crate::runner::{Collaborators, RunnerConfig, RunnerError};
use crate::sync::TemplateSyncEngine;
use crate::templates::{build_pull_request_text, generate_branch_name, TemplateRenderer};
use crate::urls::authenticated_clone_url;
use crate::vcs::{VersionControl, Workspace};
use chrono::Local;
use tracing::{debug, info, info_span, Instrument};

/// Remote update branches are pushed to.
const REMOTE: &str = "origin";

/// Brings an outdated project up to date and opens a pull request.
///
/// This function:
/// 1. Creates a timestamped branch in the project's workspace
/// 2. Applies the template changes with the sync engine
/// 3. Collects the template commits being pulled in from a separate clone
/// 4. Commits and pushes the changes
/// 5. Opens a pull request against the default branch
///
/// # Arguments
///
/// * `collaborators` - Host, version control and sync engine
/// * `config` - Run configuration
/// * `renderer` - Renderer for the pull request body header
/// * `repo` - Repository being updated
/// * `project` - Classified project
/// * `workspace` - Clone of the repository the template check ran in
///
/// # Errors
///
/// Every failure is returned as is; nothing is retried or rolled back.
pub async fn create_update_pr<H, V, S>(
    collaborators: &Collaborators<H, V, S>,
    config: &RunnerConfig,
    renderer: &TemplateRenderer,
    repo: &RepoHandle,
    project: &Project,
    workspace: &Workspace,
) -> Result<PullRequestRef, RunnerError>
where
    H: RepositoryHost,
    V: VersionControl,
    S: TemplateSyncEngine,
{
    let span = info_span!(
        "create_update_pr",
        repo = %repo.name,
        template_branch = %project.template_branch
    );

    async {
        let settings = config.settings();
        let vcs = &collaborators.vcs;

        let branch = generate_branch_name(&settings.branch_prefix, Local::now().naive_local());
        vcs.create_and_checkout_branch(workspace.repo(), &branch).await?;

        let project_dir = workspace.path().join(settings.project_directory());
        collaborators
            .sync
            .apply(&project_dir, &project.template_branch)
            .await?;

        let messages = collect_template_commits(vcs, config.token(), project).await?;
        let header = renderer.render_body_header(
            &settings.pr_body_header,
            &project.template_branch,
            &project.template_url,
        )?;
        let text = build_pull_request_text(
            &messages,
            &project.template_url,
            &settings.pr_title,
            &header,
        );

        vcs.stage_all(workspace.repo()).await?;
        vcs.commit(workspace.repo(), &text.title).await?;
        vcs.push(workspace.repo(), REMOTE, &branch).await?;

        let pull_request = collaborators
            .host
            .create_pull_request(
                repo,
                &NewPullRequest {
                    base: repo.default_branch.clone(),
                    head: branch,
                    title: text.title,
                    body: text.body,
                },
            )
            .await?;

        info!(
            url = %pull_request.url,
            "Created pull request to get up to date with the template's '{}' branch",
            project.template_branch
        );
        Ok(pull_request)
    }
    .instrument(span)
    .await
}

/// Returns the messages of the template commits between the project's last
/// synchronized revision and the tip of its tracked branch, oldest first.
async fn collect_template_commits<V: VersionControl>(
    vcs: &V,
    token: &str,
    project: &Project,
) -> Result<Vec<String>, RunnerError> {
    let clone_url = authenticated_clone_url(&project.template_url, token);
    let template = Workspace::checkout(vcs, &clone_url).await?;

    vcs.checkout(template.repo(), &project.template_branch).await?;
    let newest = vcs
        .resolve_ref(template.repo(), &project.template_branch)
        .await?;
    let commits = vcs
        .commits_in_range(template.repo(), &project.old_template_commit, &newest)
        .await?;

    debug!(
        from = %project.old_template_commit,
        to = %newest,
        count = commits.len(),
        "Collected template commits"
    );
    Ok(commits.into_iter().map(|commit| commit.message).collect())
}
