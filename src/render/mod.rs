// src/render/mod.rs
//! Template renderer: a pure mapping from the CV record and a template
//! id to a formatted HTML document. Templates differ only in style
//! configuration; which fields are shown never depends on the template.

pub mod html;
pub mod styles;

pub use html::render_html;
pub use styles::{style_for, ProfileLayout, TemplateId, TemplateStyle};
