//! Updater settings deserialization.

use crate::config::ConfigError;
use crate::templates::create_handlebars_registry;
use serde::Deserialize;
use std::path::{Component, Path};
use tracing::debug;

/// Author identity used for template update commits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommitAuthor {
    /// Commit author name.
    pub name: String,

    /// Commit author email.
    pub email: String,
}

impl Default for CommitAuthor {
    fn default() -> Self {
        Self {
            name: "template-updater".to_string(),
            email: "template-updater@users.noreply.github.com".to_string(),
        }
    }
}

/// Parsed contents of an updater settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UpdaterSettings {
    /// Path of the binding file inside each repository.
    #[serde(default = "default_binding_file")]
    pub binding_file: String,

    /// Title of update pull requests covering several template commits.
    #[serde(default = "default_pr_title")]
    pub pr_title: String,

    /// Previously used pull request titles, still recognized as pending updates.
    #[serde(default = "default_legacy_pr_titles")]
    pub legacy_pr_titles: Vec<String>,

    /// Handlebars template for the first sentence of multi-commit pull request bodies.
    #[serde(default = "default_pr_body_header")]
    pub pr_body_header: String,

    /// Prefix of update branch names.
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    /// Template branch assumed when a binding does not name one.
    #[serde(default = "default_template_branch")]
    pub default_template_branch: String,

    /// Template context fields tried, in order, to resolve a maintainer.
    #[serde(default = "default_maintainer_fields")]
    pub maintainer_fields: Vec<String>,

    /// Author of template update commits.
    #[serde(default)]
    pub commit_author: CommitAuthor,
}

impl Default for UpdaterSettings {
    fn default() -> Self {
        Self {
            binding_file: default_binding_file(),
            pr_title: default_pr_title(),
            legacy_pr_titles: default_legacy_pr_titles(),
            pr_body_header: default_pr_body_header(),
            branch_prefix: default_branch_prefix(),
            default_template_branch: default_template_branch(),
            maintainer_fields: default_maintainer_fields(),
            commit_author: CommitAuthor::default(),
        }
    }
}

pub(crate) fn default_binding_file() -> String {
    ".cruft.json".to_string()
}

pub(crate) fn default_pr_title() -> String {
    "chore(template): Update template".to_string()
}

pub(crate) fn default_legacy_pr_titles() -> Vec<String> {
    vec!["chore: Update Python template".to_string()]
}

pub(crate) fn default_pr_body_header() -> String {
    "Contains the following changes to get up-to-date with the newest version of the template's '{{template_branch}}' branch.".to_string()
}

pub(crate) fn default_branch_prefix() -> String {
    "chore/update-template-".to_string()
}

pub(crate) fn default_template_branch() -> String {
    "main".to_string()
}

pub(crate) fn default_maintainer_fields() -> Vec<String> {
    vec!["full_name".to_string()]
}

impl UpdaterSettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, cannot be parsed, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Validates field values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first invalid field.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::ValidationError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.binding_file.trim().is_empty() {
            return Err(invalid("binding-file must not be empty"));
        }
        let binding_path = Path::new(&self.binding_file);
        if !binding_path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(invalid(
                "binding-file must be a relative path inside the repository",
            ));
        }
        if self.pr_title.trim().is_empty() {
            return Err(invalid("pr-title must not be empty"));
        }
        if self.branch_prefix.trim().is_empty() {
            return Err(invalid("branch-prefix must not be empty"));
        }
        if self.default_template_branch.trim().is_empty() {
            return Err(invalid("default-template-branch must not be empty"));
        }
        if self.maintainer_fields.is_empty() {
            return Err(invalid("maintainer-fields must name at least one field"));
        }

        create_handlebars_registry()
            .register_template_string("pr-body-header", &self.pr_body_header)
            .map_err(|e| invalid(&format!("pr-body-header is not a valid template: {e}")))?;

        Ok(())
    }

    /// Returns the directory holding the binding file, relative to the
    /// repository root. The template sync tool runs there.
    pub fn project_directory(&self) -> &Path {
        Path::new(&self.binding_file)
            .parent()
            .unwrap_or_else(|| Path::new(""))
    }

    /// Returns every pull request title that marks a pending template update,
    /// the current title first.
    pub fn recognized_pr_titles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.pr_title.as_str())
            .chain(self.legacy_pr_titles.iter().map(String::as_str))
    }
}
