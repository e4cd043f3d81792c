//! Domain types shared by classification, updating and reporting.
//!
//! Every type here is a plain value: equality is by content and state
//! transitions produce new values instead of mutating existing ones.

mod binding;
mod project;
mod skipped;
mod status;

pub use binding::{BindingError, TemplateBinding, COOKIECUTTER_CONTEXT_KEY};
pub use project::Project;
pub use skipped::{SkipReason, SkippedProject};
pub use status::{PullRequestRef, Status};
