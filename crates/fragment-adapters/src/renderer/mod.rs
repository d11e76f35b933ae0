//! Template renderers.

mod tera_renderer;

pub use tera_renderer::TeraRenderer;
