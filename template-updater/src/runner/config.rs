//! Runner configuration.

use super::RunnerError;
use crate::config::UpdaterSettings;
use std::fmt;

/// Configuration for a run over one organization.
#[derive(Clone)]
pub struct RunnerConfig {
    /// Organization whose repositories are audited.
    organization: String,
    /// Token used for API calls, clones and pushes.
    token: String,
    /// Updater settings.
    settings: UpdaterSettings,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingToken`] if `token` is absent or blank.
    pub fn new(
        organization: impl Into<String>,
        token: Option<String>,
        settings: UpdaterSettings,
    ) -> Result<Self, RunnerError> {
        let token = token
            .filter(|token| !token.trim().is_empty())
            .ok_or(RunnerError::MissingToken)?;

        Ok(Self {
            organization: organization.into(),
            token,
            settings,
        })
    }

    /// Overrides the maintainer fields of the settings, unless `fields` is empty.
    #[must_use]
    pub fn with_maintainer_fields(mut self, fields: Vec<String>) -> Self {
        if !fields.is_empty() {
            self.settings.maintainer_fields = fields;
        }
        self
    }

    /// Returns the audited organization.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the configured token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the updater settings.
    pub fn settings(&self) -> &UpdaterSettings {
        &self.settings
    }
}

impl fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("organization", &self.organization)
            .field("token", &"***")
            .field("settings", &self.settings)
            .finish()
    }
}
