//! Built-in template discovery.
//!
//! This module provides [`resolve_templates`], the single entry-point for
//! picking the component template set. It abstracts over where templates
//! live so callers do not need to know about the embedded React set.
//!
//! # Template resolution order
//!
//! 1. **An explicit directory**: `--templates <DIR>`, `$FRAGMENT_TEMPLATES_DIR`
//!    or `templates.local_path` in the config file (the CLI resolves which).
//!    It must contain a `template.toml`; a broken directory is an error.
//! 2. **The embedded React set** ([`react_component`]), compiled into the
//!    binary from `templates/react-component/`.

use std::path::Path;

use tracing::{debug, info, instrument};

use fragment_core::{
    domain::{FileRole, TemplateFile, TemplateSet},
    error::FragmentResult,
};

use crate::template_loader::FilesystemTemplateLoader;

const COMPONENT: &str = include_str!("../templates/react-component/component.tsx.tera");
const COMPONENT_SPEC: &str = include_str!("../templates/react-component/component.spec.tsx.tera");
const STYLESHEET: &str = include_str!("../templates/react-component/stylesheet.tera");

/// Name of the embedded template set.
pub const BUILTIN_NAME: &str = "react-component";

// ── Public API ────────────────────────────────────────────────────────────────

/// Pick the template set for this run.
#[instrument]
pub fn resolve_templates(local: Option<&Path>) -> FragmentResult<TemplateSet> {
    match local {
        Some(dir) => {
            debug!(path = %dir.display(), "loading local templates");
            let set = FilesystemTemplateLoader::new(dir).load()?;
            info!(path = %dir.display(), name = %set.name, "local templates loaded");
            Ok(set)
        }
        None => Ok(react_component()),
    }
}

/// The React function component set: component, stylesheet and spec.
///
/// Template variables are those of `RenderContext`.
pub fn react_component() -> TemplateSet {
    TemplateSet::new(BUILTIN_NAME)
        .with_file(TemplateFile::new(
            "{{ file_name }}.tsx",
            COMPONENT,
            FileRole::Component,
        ))
        .with_file(TemplateFile::new(
            "{{ file_name }}.{{ style }}",
            STYLESHEET,
            FileRole::Stylesheet,
        ))
        .with_file(TemplateFile::new(
            "{{ file_name }}.spec.tsx",
            COMPONENT_SPEC,
            FileRole::Spec,
        ))
}
