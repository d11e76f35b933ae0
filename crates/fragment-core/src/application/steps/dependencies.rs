//! Dependency declaration in the root `package.json`.

use tracing::{debug, info};

use crate::{
    application::rules::{Rule, noop},
    domain::{
        NormalizedPlan, PACKAGE_JSON, PackageDependencies, PackageManifest, ProjectTree,
        ROUTING_DEPENDENCIES, RelativePath, styles::find_style_library,
    },
    error::FragmentResult,
};

/// Declare the packages the plan's CSS-in-JS library needs.
///
/// No-op for plain stylesheets, `none`, and modules missing from the
/// registry.
pub fn add_style_dependencies(plan: &NormalizedPlan) -> Rule {
    let Some(module) = plan.styled_module else {
        return noop();
    };
    match find_style_library(module) {
        Some(def) => declare_dependencies("style-dependencies", def.packages),
        None => {
            debug!(module, "No registry entry for styling module");
            noop()
        }
    }
}

/// Declare `react-router-dom` and its typings when routing is requested.
pub fn add_routing_dependencies(plan: &NormalizedPlan) -> Rule {
    if !plan.routing {
        return noop();
    }
    declare_dependencies("routing-dependencies", ROUTING_DEPENDENCIES)
}

/// Merge `deps` into the root manifest, creating it when absent.
pub fn declare_dependencies(name: &'static str, deps: PackageDependencies) -> Rule {
    if deps.is_empty() {
        return noop();
    }
    Rule::transform(name, move |tree| merge_into_manifest(tree, &deps))
}

fn merge_into_manifest(tree: &mut ProjectTree, deps: &PackageDependencies) -> FragmentResult<()> {
    let path = RelativePath::lenient(PACKAGE_JSON);
    let mut manifest = match tree.read(&path) {
        Some(content) => PackageManifest::parse(content)?,
        None => PackageManifest::empty(),
    };

    manifest.add_dependencies(deps)?;
    info!(
        dependencies = deps.dependencies.len(),
        dev_dependencies = deps.dev_dependencies.len(),
        "Declared dependencies in {PACKAGE_JSON}"
    );
    tree.write(path, manifest.to_json_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileAction, ProjectType, Style};

    fn plan(style: Style, routing: bool) -> NormalizedPlan {
        NormalizedPlan {
            name: "foo".into(),
            project: "ui".into(),
            project_type: ProjectType::Library,
            project_source_root: RelativePath::lenient("ui/src"),
            directory: RelativePath::lenient("lib/foo"),
            file_name: "foo".into(),
            class_name: "Foo".into(),
            style,
            styled_module: style.styled_module(),
            has_styles: style.has_styles(),
            skip_tests: false,
            export: false,
            js: false,
            routing,
            skip_format: false,
        }
    }

    fn manifest(tree: &ProjectTree) -> PackageManifest {
        PackageManifest::parse(tree.read(&RelativePath::lenient(PACKAGE_JSON)).unwrap()).unwrap()
    }

    #[test]
    fn plain_styles_are_noops() {
        for style in [Style::Css, Style::Scss, Style::Less, Style::Stylus, Style::None] {
            assert!(add_style_dependencies(&plan(style, false)).is_noop(), "{style}");
        }
    }

    #[test]
    fn styled_components_updates_manifest() {
        let mut tree = ProjectTree::new().with_file(PACKAGE_JSON, r#"{"name":"hack"}"#);
        add_style_dependencies(&plan(Style::StyledComponents, false))
            .apply(&mut tree)
            .unwrap();

        let m = manifest(&tree);
        assert_eq!(m.dependency("styled-components"), Some("5.0.1"));
        assert_eq!(m.dev_dependency("@types/styled-components"), Some("5.0.1"));
        assert_eq!(
            tree.action(&RelativePath::lenient(PACKAGE_JSON)),
            Some(FileAction::Update)
        );
    }

    #[test]
    fn missing_manifest_is_created() {
        let mut tree = ProjectTree::new();
        add_style_dependencies(&plan(Style::EmotionStyled, false))
            .apply(&mut tree)
            .unwrap();

        let m = manifest(&tree);
        assert_eq!(m.dependency("@emotion/styled"), Some("10.0.27"));
        assert_eq!(m.dependency("@emotion/core"), Some("10.0.27"));
        assert_eq!(
            tree.action(&RelativePath::lenient(PACKAGE_JSON)),
            Some(FileAction::Create)
        );
    }

    #[test]
    fn routing_only_when_requested() {
        assert!(add_routing_dependencies(&plan(Style::Css, false)).is_noop());

        let mut tree = ProjectTree::new().with_file(PACKAGE_JSON, "{}");
        add_routing_dependencies(&plan(Style::Css, true))
            .apply(&mut tree)
            .unwrap();
        let m = manifest(&tree);
        assert_eq!(m.dependency("react-router-dom"), Some("5.1.2"));
        assert_eq!(m.dev_dependency("@types/react-router-dom"), Some("5.1.3"));
    }

    #[test]
    fn malformed_manifest_fails() {
        let mut tree = ProjectTree::new().with_file(PACKAGE_JSON, "not json");
        let result = add_style_dependencies(&plan(Style::StyledComponents, false)).apply(&mut tree);
        assert!(result.is_err());
    }
}
