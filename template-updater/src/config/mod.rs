//! Updater settings loading.
//!
//! Settings are read from an optional TOML file. Every key has a default, so
//! a run without a settings file behaves like one with an empty file.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{CommitAuthor, UpdaterSettings};

use std::path::Path;
use tracing::info;

/// Loads settings from `path`, or returns the defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, or invalid.
pub fn load_settings(path: Option<&Path>) -> Result<UpdaterSettings, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading settings");
            UpdaterSettings::load(path)
        }
        None => Ok(UpdaterSettings::default()),
    }
}
