//! Settings error types.

use thiserror::Error;

/// Errors raised while loading updater settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but cannot be read.
    #[error("Failed to read settings file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has unknown keys.
    #[error("Failed to parse settings in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value.
    #[error("Invalid settings in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// The given settings path does not exist.
    #[error("Settings file not found: {path}")]
    MissingFile { path: String },
}
