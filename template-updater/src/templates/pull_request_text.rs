//! Pull request title and body synthesis.

use super::references::rewrite_references;

/// Title and body of a template update pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestText {
    /// Pull request title, also used as the local commit message.
    pub title: String,

    /// Pull request body (markdown).
    pub body: String,
}

/// Builds the pull request text from the template commits being pulled in.
///
/// With exactly one commit, its first line becomes the title and the remaining
/// lines the body. Otherwise `generic_title` is used and the body starts with
/// `header` followed by one bullet per commit message; lines after the first
/// are indented so they stay within their bullet. An empty commit list still
/// produces a body with a single empty bullet.
///
/// # Arguments
///
/// * `messages` - Raw template commit messages, oldest first
/// * `template_url` - Template repository location, used for link rewriting
/// * `generic_title` - Title used unless exactly one commit is pulled in
/// * `header` - Rendered first sentence of multi-commit bodies
#[must_use]
pub fn build_pull_request_text<S: AsRef<str>>(
    messages: &[S],
    template_url: &str,
    generic_title: &str,
    header: &str,
) -> PullRequestText {
    let messages: Vec<String> = messages
        .iter()
        .map(|message| rewrite_references(message.as_ref(), template_url))
        .collect();

    if let [message] = messages.as_slice() {
        let mut lines = message.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        return PullRequestText { title, body };
    }

    let bullets: Vec<String> = messages
        .iter()
        .map(|message| message.trim().lines().collect::<Vec<_>>().join("\n  "))
        .collect();

    PullRequestText {
        title: generic_title.to_string(),
        body: format!("{header}\n\n- {}\n", bullets.join("\n\n- ")),
    }
}
