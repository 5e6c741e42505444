pub mod filters;
pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

/// Returns the template engine used for generation.
pub fn get_template_engine() -> MiniJinjaRenderer {
    MiniJinjaRenderer::new()
}
