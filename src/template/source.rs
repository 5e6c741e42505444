use std::borrow::Cow;
use std::path::PathBuf;

use crate::constants::templates;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::builtin::{MAIN_TEMPLATE, PART_TEMPLATE};

/// Where the text of a template comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// Template text held in memory
    Inline { text: Cow<'static, str>, name: String },
    /// Template text read from a file when it is needed
    File { path: PathBuf, name: String },
}

impl TemplateSource {
    /// The built-in part template.
    pub fn default_part() -> Self {
        TemplateSource::Inline {
            text: Cow::Borrowed(PART_TEMPLATE),
            name: templates::PART.to_string(),
        }
    }

    /// The built-in main template.
    pub fn default_main() -> Self {
        TemplateSource::Inline {
            text: Cow::Borrowed(MAIN_TEMPLATE),
            name: templates::MAIN.to_string(),
        }
    }

    pub fn file(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        TemplateSource::File { path: path.into(), name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            TemplateSource::Inline { name, .. } | TemplateSource::File { name, .. } => name,
        }
    }

    /// Reads the template text.
    ///
    /// # Returns
    /// * `Result<Cow<str>>` - The text, or `Error::NoValidTemplate` if a file
    ///   source cannot be read
    pub fn load(&self) -> Result<Cow<'_, str>> {
        match self {
            TemplateSource::Inline { text, .. } => Ok(Cow::Borrowed(text.as_ref())),
            TemplateSource::File { path, name } => {
                log::debug!("Loading template '{name}' from {}", path.display());
                std::fs::read_to_string(path).map(Cow::Owned).map_err(|e| {
                    Error::NoValidTemplate {
                        name: name.clone(),
                        reason: format!("cannot read '{}': {e}", path.display()),
                    }
                })
            }
        }
    }

    /// Loads the template and binds it to its name in `engine`.
    pub fn resolve(&self, engine: &mut dyn TemplateRenderer) -> Result<()> {
        let text = self.load()?;
        engine.add_template(self.name(), &text)
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Inline { name, .. } => write!(f, "built-in template '{name}'"),
            TemplateSource::File { path, name } => {
                write!(f, "template '{name}' at '{}'", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_template_source_display() {
        assert_eq!(TemplateSource::default_part().to_string(), "built-in template 'part'");

        let file = TemplateSource::file("/tmp/part.j2", "part");
        assert_eq!(file.to_string(), "template 'part' at '/tmp/part.j2'");
    }

    #[test]
    fn test_builtin_templates_parse() {
        let mut engine = MiniJinjaRenderer::new();
        TemplateSource::default_part().resolve(&mut engine).unwrap();
        TemplateSource::default_main().resolve(&mut engine).unwrap();
    }

    #[test]
    fn test_file_source_is_read_lazily() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.j2");
        let source = TemplateSource::file(&path, "part");

        std::fs::write(&path, "hello").unwrap();
        let mut engine = MiniJinjaRenderer::new();
        source.resolve(&mut engine).unwrap();

        let rendered = engine.render("part", &json!({ "Day": 1, "Year": 2024, "Part": "One" }));
        assert_eq!(rendered.unwrap(), "hello");
    }

    #[test]
    fn test_missing_file_is_invalid_template() {
        let source = TemplateSource::file("/path/that/does/not/exist.j2", "main");
        let mut engine = MiniJinjaRenderer::new();

        let err = source.resolve(&mut engine).unwrap_err();
        assert!(matches!(err, Error::NoValidTemplate { ref name, .. } if name == "main"));
    }

    #[test]
    fn test_unparseable_file_is_invalid_template() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.j2");
        std::fs::write(&path, "{% if %}").unwrap();

        let mut engine = MiniJinjaRenderer::new();
        let err = TemplateSource::file(&path, "part").resolve(&mut engine).unwrap_err();
        assert!(matches!(err, Error::NoValidTemplate { .. }));
    }
}
