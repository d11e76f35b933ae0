use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath,
    value_objects::{ProjectType, Style},
};

/// Everything the generation steps need, derived once from a request.
///
/// Produced by the option normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPlan {
    pub name: String,
    pub project: String,
    pub project_type: ProjectType,
    pub project_source_root: RelativePath,
    /// Destination relative to `project_source_root` (e.g. `lib/foo-bar`).
    pub directory: RelativePath,
    /// Base name of emitted files, casing already applied.
    pub file_name: String,
    /// PascalCase symbol of the generated component.
    pub class_name: String,
    pub style: Style,
    pub styled_module: Option<&'static str>,
    pub has_styles: bool,
    pub skip_tests: bool,
    pub export: bool,
    pub js: bool,
    pub routing: bool,
    pub skip_format: bool,
}

impl NormalizedPlan {
    /// Absolute-in-workspace destination folder.
    pub fn component_dir(&self) -> RelativePath {
        self.project_source_root.join(self.directory.as_str())
    }

    /// Barrel file path for this plan's output flavour.
    pub fn barrel_path(&self) -> RelativePath {
        self.project_source_root
            .join(if self.js { "index.js" } else { "index.ts" })
    }

    /// `export * from './<directory>/<file_name>';`
    pub fn export_statement(&self) -> String {
        format!(
            "export * from './{}';",
            self.directory.join(&self.file_name)
        )
    }

    /// Values exposed to templates.
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            name: self.name.clone(),
            class_name: self.class_name.clone(),
            file_name: self.file_name.clone(),
            style: self.style.as_str().to_string(),
            styled_module: self.styled_module.map(str::to_string),
            has_styles: self.has_styles,
            routing: self.routing,
            js: self.js,
        }
    }
}

/// Variables available to component templates.
///
/// | Variable        | Example             |
/// |-----------------|---------------------|
/// | `name`          | `foo-bar`           |
/// | `class_name`    | `FooBar`            |
/// | `file_name`     | `foo-bar`           |
/// | `style`         | `scss`              |
/// | `styled_module` | `@emotion/styled`   |
/// | `has_styles`    | `true`              |
/// | `routing`       | `false`             |
/// | `js`            | `false`             |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub name: String,
    pub class_name: String,
    pub file_name: String,
    pub style: String,
    pub styled_module: Option<String>,
    pub has_styles: bool,
    pub routing: bool,
    pub js: bool,
}
