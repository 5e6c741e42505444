use super::filters::*;
use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Undefined fields are errors, trailing newlines are kept, and block tags
/// do not leave blank lines behind.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("snake_case", to_snake_case);
        env.add_filter("zero_pad", zero_pad);

        Self { env }
    }

    fn map_error(name: &str, e: minijinja::Error) -> Error {
        match e.kind() {
            ErrorKind::SyntaxError | ErrorKind::BadEscape | ErrorKind::TemplateNotFound => {
                Error::NoValidTemplate { name: name.to_string(), reason: e.to_string() }
            }
            _ => Error::TemplateRenderError { name: name.to_string(), source: e },
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), template.to_string())
            .map_err(|e| Self::map_error(name, e))
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name).map_err(|e| Self::map_error(name, e))?;
        tmpl.render(context).map_err(|e| Self::map_error(name, e))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::renderer::{interface::TemplateRenderer, MiniJinjaRenderer};
    use serde_json::json;

    fn test_template(template: &str, context: serde_json::Value, expected: &str) {
        let mut renderer = MiniJinjaRenderer::new();
        renderer.add_template("test", template).unwrap();
        let result = renderer.render("test", &context).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_filters() {
        test_template("day{{ day | zero_pad }}", json!({ "day": 3 }), "day03");
        test_template("{{ part | snake_case }}", json!({ "part": "Two" }), "two");
        test_template("{{ part | lower }}", json!({ "part": "One" }), "one");
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        test_template("line\n", json!({}), "line\n");
        test_template("hello", json!({ "day": 1 }), "hello");
    }

    #[test]
    fn test_block_tags_leave_no_blank_lines() {
        test_template(
            "{% for d in days %}\n{{ d }}\n{% endfor %}\n",
            json!({ "days": ["day01", "day02"] }),
            "day01\nday02\n",
        );
    }

    #[test]
    fn test_no_html_escaping() {
        test_template("{{ v }}", json!({ "v": "a < b && \"c\"" }), "a < b && \"c\"");
    }

    #[test]
    fn test_undefined_field_is_a_render_error() {
        let mut renderer = MiniJinjaRenderer::new();
        renderer.add_template("part", "{{ missing }}").unwrap();
        let err = renderer.render("part", &json!({})).unwrap_err();
        assert!(matches!(err, Error::TemplateRenderError { ref name, .. } if name == "part"));
    }

    #[test]
    fn test_syntax_error_is_invalid_template() {
        let mut renderer = MiniJinjaRenderer::new();
        let err = renderer.add_template("main", "{% for %}").unwrap_err();
        assert!(matches!(err, Error::NoValidTemplate { ref name, .. } if name == "main"));
    }

    #[test]
    fn test_rendering_unknown_name_is_invalid_template() {
        let renderer = MiniJinjaRenderer::new();
        let err = renderer.render("nope", &json!({})).unwrap_err();
        assert!(matches!(err, Error::NoValidTemplate { .. }));
    }
}
