// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Fragment.
//!
//! Pure generation rules: name casing, style semantics, dependency tables,
//! the in-memory project tree and the documents it holds. All I/O and
//! template rendering are handled via ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Workspace files arrive as an in-memory [`ProjectTree`]
//! - **Immutable inputs**: Requests and plans are built once, never mutated
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod names;
pub mod styles;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    FileAction, FileChange, FileRole, GenerationRequest, GenerationRequestBuilder,
    NormalizedPlan, PACKAGE_JSON, PackageManifest, ProjectConfig, ProjectTree, RenderContext,
    TemplateFile, TemplateSet, TemplateSource, WORKSPACE_FILES, WorkspaceConfig,
};

pub use error::{DomainError, ErrorCategory};
pub use names::Names;
pub use styles::{PackageDependencies, ROUTING_DEPENDENCIES, STYLE_REGISTRY};
pub use value_objects::{ProjectType, Style};

pub use entities::common::RelativePath;
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Style / Dependency Tests
    // ========================================================================

    #[test]
    fn every_css_in_js_style_has_registry_entry() {
        for style in Style::ALL {
            assert_eq!(
                style.is_css_in_js(),
                styles::dependencies_for(style).is_some(),
                "{style}"
            );
        }
    }

    #[test]
    fn invalid_style_lists_all_choices() {
        let err = Style::from_str("sass").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported style option found: sass. Valid values are: \"css\", \"scss\", \"less\", \"styl\", \"styled-components\", \"@emotion/styled\", \"none\""
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn routing_and_style_merge_into_one_manifest() {
        let mut manifest = PackageManifest::empty();
        manifest
            .add_dependencies(&styles::dependencies_for(Style::StyledComponents).unwrap())
            .unwrap();
        manifest.add_dependencies(&ROUTING_DEPENDENCIES).unwrap();

        assert_eq!(manifest.dependency("styled-components"), Some("5.0.1"));
        assert_eq!(manifest.dependency("react-router-dom"), Some("5.1.2"));
        assert_eq!(manifest.dev_dependency("@types/styled-components"), Some("5.0.1"));
        assert_eq!(manifest.dev_dependency("@types/react-router-dom"), Some("5.1.3"));
    }

    // ========================================================================
    // Tree + Workspace Tests
    // ========================================================================

    #[test]
    fn workspace_is_read_from_tree() {
        let tree = ProjectTree::new().with_file(
            "workspace.json",
            r#"{"projects":{"ui":{"root":"libs/ui","projectType":"library"}}}"#,
        );
        let ws = WorkspaceConfig::from_tree(&tree).unwrap();
        let ui = ws.project("ui").unwrap();
        assert_eq!(ui.source_root, RelativePath::lenient("libs/ui/src"));
        assert_eq!(ui.project_type.base_dir(), "lib");
    }

    #[test]
    fn project_not_found_is_not_found_category() {
        let ws = WorkspaceConfig::default();
        let err = ws.project("ghost").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "Cannot find project 'ghost'");
    }

    // ========================================================================
    // Names Tests
    // ========================================================================

    #[test]
    fn names_cover_all_forms() {
        let names = Names::new("foo-bar");
        assert_eq!(names.class_name, "FooBar");
        assert_eq!(names.property_name, "fooBar");
        assert_eq!(names.file_name, "foo-bar");
    }
}
