//! Option normalization: request + workspace → [`NormalizedPlan`].

use tracing::{debug, warn};

use crate::{
    domain::{
        DomainValidator, GenerationRequest, Names, NormalizedPlan, ProjectTree, RelativePath,
        Style, WorkspaceConfig,
    },
    error::FragmentResult,
};

pub const EXPORT_ON_APPLICATION_WARNING: &str =
    "The \"--export\" option should not be used with applications and will do nothing.";

/// A plan plus the non-fatal findings made while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub plan: NormalizedPlan,
    pub warnings: Vec<String>,
}

/// Validate the request and resolve everything later steps need.
///
/// Fails fast on an invalid style, a name containing a path separator, or
/// a project missing from the workspace file. Reads the tree but never
/// writes to it.
pub fn normalize_options(
    request: &GenerationRequest,
    tree: &ProjectTree,
) -> FragmentResult<Normalized> {
    let style: Style = request.style.parse()?;

    let directory = request
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    DomainValidator::validate_component_name(&request.name, directory)?;
    DomainValidator::validate_project_name(&request.project)?;

    let workspace = WorkspaceConfig::from_tree(tree)?;
    let project = workspace.project(&request.project)?;

    let names = Names::new(&request.name);
    let mut dir = match directory {
        Some(explicit) => RelativePath::lenient(explicit),
        None => RelativePath::lenient(project.project_type.base_dir()),
    };
    if !request.flat {
        dir = dir.join(&names.file_name);
    }

    let file_name = if request.pascal_case_files {
        names.class_name.clone()
    } else {
        names.file_name.clone()
    };

    let mut warnings = Vec::new();
    if request.export && project.project_type.is_application() {
        warn!(project = %project.name, "{EXPORT_ON_APPLICATION_WARNING}");
        warnings.push(EXPORT_ON_APPLICATION_WARNING.to_string());
    }

    let plan = NormalizedPlan {
        name: request.name.clone(),
        project: project.name.clone(),
        project_type: project.project_type,
        project_source_root: project.source_root.clone(),
        directory: dir,
        file_name,
        class_name: names.class_name,
        style,
        styled_module: style.styled_module(),
        has_styles: style.has_styles(),
        skip_tests: request.skip_tests,
        export: request.export,
        js: request.js,
        routing: request.routing,
        skip_format: request.skip_format,
    };
    debug!(?plan, "Normalized options");

    Ok(Normalized { plan, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{DomainError, ProjectType},
        error::FragmentError,
    };

    fn workspace() -> ProjectTree {
        ProjectTree::new().with_file(
            "workspace.json",
            r#"{
                "projects": {
                    "ui": { "root": "ui", "sourceRoot": "ui/src", "projectType": "library" },
                    "shop": { "root": "apps/shop", "sourceRoot": "apps/shop/src", "projectType": "application" }
                }
            }"#,
        )
    }

    fn domain_err(result: FragmentResult<Normalized>) -> DomainError {
        match result {
            Err(FragmentError::Domain(e)) => e,
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[test]
    fn library_defaults() {
        let req = GenerationRequest::builder("foo-bar", "ui").build();
        let Normalized { plan, warnings } = normalize_options(&req, &workspace()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(plan.project_type, ProjectType::Library);
        assert_eq!(plan.project_source_root.as_str(), "ui/src");
        assert_eq!(plan.directory.as_str(), "lib/foo-bar");
        assert_eq!(plan.file_name, "foo-bar");
        assert_eq!(plan.class_name, "FooBar");
        assert_eq!(plan.style, Style::Css);
        assert_eq!(plan.styled_module, None);
        assert!(plan.has_styles);
    }

    #[test]
    fn application_uses_app_dir() {
        let req = GenerationRequest::builder("cart", "shop").build();
        let plan = normalize_options(&req, &workspace()).unwrap().plan;
        assert_eq!(plan.directory.as_str(), "app/cart");
    }

    #[test]
    fn explicit_directory_and_flat() {
        let req = GenerationRequest::builder("FooBar", "ui")
            .directory(Some("./shared\\forms/"))
            .flat(true)
            .build();
        let plan = normalize_options(&req, &workspace()).unwrap().plan;
        assert_eq!(plan.directory.as_str(), "shared/forms");
        assert_eq!(plan.file_name, "foo-bar");
    }

    #[test]
    fn blank_directory_is_ignored() {
        let req = GenerationRequest::builder("foo", "ui")
            .directory(Some("   "))
            .build();
        let plan = normalize_options(&req, &workspace()).unwrap().plan;
        assert_eq!(plan.directory.as_str(), "lib/foo");
    }

    #[test]
    fn pascal_case_files_keeps_kebab_folder() {
        let req = GenerationRequest::builder("foo-bar", "ui")
            .pascal_case_files(true)
            .build();
        let plan = normalize_options(&req, &workspace()).unwrap().plan;
        assert_eq!(plan.file_name, "FooBar");
        assert_eq!(plan.directory.as_str(), "lib/foo-bar");
    }

    #[test]
    fn css_in_js_sets_styled_module() {
        let req = GenerationRequest::builder("foo", "ui")
            .style("@emotion/styled")
            .build();
        let plan = normalize_options(&req, &workspace()).unwrap().plan;
        assert_eq!(plan.styled_module, Some("@emotion/styled"));
    }

    #[test]
    fn none_style_has_no_styles() {
        let req = GenerationRequest::builder("foo", "ui").style("none").build();
        let plan = normalize_options(&req, &workspace()).unwrap().plan;
        assert!(!plan.has_styles);
        assert_eq!(plan.styled_module, None);
    }

    #[test]
    fn invalid_style_fails() {
        let req = GenerationRequest::builder("foo", "ui").style("sass").build();
        assert!(matches!(
            domain_err(normalize_options(&req, &workspace())),
            DomainError::InvalidStyle { .. }
        ));
    }

    #[test]
    fn separator_in_name_fails() {
        let req = GenerationRequest::builder("Foo/Bar", "ui").build();
        let err = domain_err(normalize_options(&req, &workspace()));
        assert_eq!(
            err.to_string(),
            "Found \"/\" in the component name. Did you mean to use the --directory option (e.g. `fragment component Bar --directory foo`)?"
        );
    }

    #[test]
    fn unknown_project_fails() {
        let req = GenerationRequest::builder("foo", "nope").build();
        assert!(matches!(
            domain_err(normalize_options(&req, &workspace())),
            DomainError::ProjectNotFound { .. }
        ));
    }

    #[test]
    fn style_is_checked_before_name() {
        let req = GenerationRequest::builder("a/b", "nope").style("sass").build();
        assert!(matches!(
            domain_err(normalize_options(&req, &workspace())),
            DomainError::InvalidStyle { .. }
        ));
    }

    #[test]
    fn export_on_application_warns() {
        let req = GenerationRequest::builder("cart", "shop").export(true).build();
        let normalized = normalize_options(&req, &workspace()).unwrap();
        assert_eq!(normalized.warnings, vec![EXPORT_ON_APPLICATION_WARNING]);
    }
}
