#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod classifier;
pub mod config;
pub mod host;
pub mod model;
pub mod pull_requests;
pub mod report;
pub mod runner;
pub mod summary;
pub mod sync;
pub mod templates;
pub mod urls;
pub mod vcs;

pub use classifier::{Classification, Classifier};
pub use config::{load_settings, CommitAuthor, ConfigError, UpdaterSettings};
pub use host::{GitHubHost, HostError, NewPullRequest, OpenPullRequest, RepoHandle, RepositoryHost};
pub use model::{
    BindingError, Project, PullRequestRef, SkipReason, SkippedProject, Status, TemplateBinding,
};
pub use pull_requests::create_update_pr;
pub use report::ReportRenderer;
pub use runner::{Collaborators, Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use sync::{CruftCli, SyncError, TemplateSyncEngine};
pub use templates::{
    build_pull_request_text, create_handlebars_registry, generate_branch_name, rewrite_references,
    PullRequestText, TemplateError, TemplateRenderer,
};
pub use urls::{authenticated_clone_url, redact_credentials, web_url};
pub use vcs::{CommitInfo, GitCli, LocalRepo, VcsError, VersionControl, Workspace};
