//! Comparing working copies against their template and applying template changes.

mod cruft;
mod error;

pub use cruft::CruftCli;
pub use error::SyncError;

use async_trait::async_trait;
use std::path::Path;

/// Trait abstracting the template sync tool for testability.
#[async_trait]
pub trait TemplateSyncEngine: Send + Sync {
    /// Returns true if `working_dir` already matches the tip of `template_ref`.
    async fn check(&self, working_dir: &Path, template_ref: &str) -> Result<bool, SyncError>;

    /// Applies the changes between the recorded template commit and the tip
    /// of `template_ref` to `working_dir`.
    async fn apply(&self, working_dir: &Path, template_ref: &str) -> Result<(), SyncError>;
}
