//! Templates used to generate solution sources
//!
//! This module contains the template components:
//! - `builtin`: The default templates embedded at build time
//! - `source`: Where a template's text comes from and how it is bound to a renderer

pub mod builtin;
pub mod source;

pub use source::TemplateSource;
