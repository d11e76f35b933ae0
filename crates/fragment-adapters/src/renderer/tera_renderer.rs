//! Tera-backed template renderer.

use std::error::Error as _;

use tera::{Context, Tera};
use tracing::instrument;

use fragment_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::FragmentResult,
};

/// Renders template sources with Tera. Autoescaping is off; output is
/// source code, not HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    /// Create a new Tera renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip(self, source, context))]
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> FragmentResult<String> {
        let context = Context::from_serialize(context).map_err(|err| rendering_failed(name, &err))?;
        Tera::one_off(source, &context, false).map_err(|err| rendering_failed(name, &err))
    }
}

/// Tera nests the useful message in the error's source chain.
fn rendering_failed(name: &str, err: &tera::Error) -> fragment_core::error::FragmentError {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }
    ApplicationError::RenderingFailed {
        template: name.to_string(),
        reason,
    }
    .into()
}
