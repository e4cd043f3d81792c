//! Template renderer.

use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renderer for the configurable parts of pull request text.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the header sentence of a multi-commit pull request body.
    ///
    /// Available variables are `template_branch` and `template_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_body_header(
        &self,
        template: &str,
        template_branch: &str,
        template_url: &str,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "template_branch": template_branch,
            "template_url": template_url,
        });

        self.render_template(template, &data)
    }

    /// Renders a template with the given data.
    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpdaterSettings;

    #[test]
    fn renders_default_header() {
        let renderer = TemplateRenderer::new();

        let header = renderer
            .render_body_header(
                &UpdaterSettings::default().pr_body_header,
                "dev",
                "https://github.com/org/tpl",
            )
            .unwrap();

        assert_eq!(
            header,
            "Contains the following changes to get up-to-date with the newest version of the template's 'dev' branch."
        );
    }

    #[test]
    fn no_html_escaping() {
        let renderer = TemplateRenderer::new();

        let header = renderer
            .render_body_header("<{{template_branch}}> & more", "feat/x", "tpl")
            .unwrap();

        assert_eq!(header, "<feat/x> & more");
    }

    #[test]
    fn strict_mode_rejects_unknown_variables() {
        let renderer = TemplateRenderer::new();

        let result = renderer.render_body_header("{{unknown}}", "dev", "tpl");

        assert!(result.is_err());
    }
}
