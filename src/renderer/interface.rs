use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Parses a template and binds it to `name`.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    ///
    /// # Returns
    /// * `Result<()>` - `Error::NoValidTemplate` when the text does not parse
    fn add_template(&mut self, name: &str, template: &str) -> Result<()>;

    /// Renders a previously added template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name the template was added under
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
