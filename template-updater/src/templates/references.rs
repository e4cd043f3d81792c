//! Rewriting pull request references in template commit messages.

use crate::urls::web_url;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PULL_REQUEST_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(\d+)\)").expect("reference pattern is valid"));

/// Replaces every `(#N)` in `message` with a markdown link to pull request
/// `N` of the template repository at `template_url`.
#[must_use]
pub fn rewrite_references(message: &str, template_url: &str) -> String {
    let base = web_url(template_url);

    PULL_REQUEST_REFERENCE
        .replace_all(message, |captures: &Captures| {
            format!("([PR]({base}/pull/{}))", &captures[1])
        })
        .into_owned()
}
