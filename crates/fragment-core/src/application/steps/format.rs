//! Final formatting pass over the files a run touched.

use std::sync::Arc;

use tracing::debug;

use crate::{
    application::{
        ports::CodeFormatter,
        rules::{Rule, noop},
    },
    domain::{FileAction, NormalizedPlan, RelativePath},
};

/// Re-format the files this run created. No-op with `skip_format`.
///
/// Updated files are left alone: their original text must survive
/// byte for byte, and the steps that update them write their own
/// additions in final form. Files the formatter does not handle are left
/// as generated.
pub fn format_files(plan: &NormalizedPlan, formatter: Arc<dyn CodeFormatter>) -> Rule {
    if plan.skip_format {
        return noop();
    }

    Rule::transform("format", move |tree| {
        let created: Vec<RelativePath> = tree
            .touched()
            .filter(|path| tree.action(path) == Some(FileAction::Create))
            .cloned()
            .collect();
        for path in created {
            let Some(content) = tree.read(&path) else {
                continue;
            };
            if let Some(formatted) = formatter.format(&path, content)? {
                if formatted != content {
                    debug!(path = %path, "Formatted");
                    tree.write(path, formatted);
                }
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockCodeFormatter,
        domain::{ProjectTree, ProjectType, Style},
    };

    fn plan(skip_format: bool) -> NormalizedPlan {
        NormalizedPlan {
            name: "foo".into(),
            project: "ui".into(),
            project_type: ProjectType::Library,
            project_source_root: RelativePath::lenient("ui/src"),
            directory: RelativePath::lenient("lib/foo"),
            file_name: "foo".into(),
            class_name: "Foo".into(),
            style: Style::Css,
            styled_module: None,
            has_styles: true,
            skip_tests: false,
            export: false,
            js: false,
            routing: false,
            skip_format,
        }
    }

    #[test]
    fn formats_only_touched_files() {
        let mut formatter = MockCodeFormatter::new();
        formatter
            .expect_format()
            .withf(|path, _| path.as_str() == "ui/src/lib/foo/foo.tsx")
            .times(1)
            .returning(|_, content| Ok(Some(content.trim_end().to_string() + "\n")));

        let mut tree = ProjectTree::new().with_file("untouched.ts", "x   \n\n\n");
        tree.write(RelativePath::lenient("ui/src/lib/foo/foo.tsx"), "code\n\n\n");

        format_files(&plan(false), Arc::new(formatter))
            .apply(&mut tree)
            .unwrap();

        let path = RelativePath::lenient("ui/src/lib/foo/foo.tsx");
        assert_eq!(tree.read(&path), Some("code\n"));
        assert_eq!(tree.action(&path), Some(FileAction::Create));
        assert_eq!(tree.read(&RelativePath::lenient("untouched.ts")), Some("x   \n\n\n"));
    }

    #[test]
    fn updated_files_are_not_formatted() {
        let mut formatter = MockCodeFormatter::new();
        formatter.expect_format().times(0);

        let original = "export * from './lib/a/a';\r\n\n\n// section   \n";
        let updated = format!("{original}export * from './lib/foo/foo';\n");
        let mut tree = ProjectTree::new().with_file("ui/src/index.ts", original);
        tree.write(RelativePath::lenient("ui/src/index.ts"), updated.clone());

        format_files(&plan(false), Arc::new(formatter))
            .apply(&mut tree)
            .unwrap();

        let path = RelativePath::lenient("ui/src/index.ts");
        assert_eq!(tree.read(&path), Some(updated.as_str()));
        assert_eq!(tree.action(&path), Some(FileAction::Update));
    }

    #[test]
    fn unhandled_files_are_kept() {
        let mut formatter = MockCodeFormatter::new();
        formatter.expect_format().returning(|_, _| Ok(None));

        let mut tree = ProjectTree::new();
        tree.write(RelativePath::lenient("a.svg"), "<svg/>  ");
        format_files(&plan(false), Arc::new(formatter))
            .apply(&mut tree)
            .unwrap();
        assert_eq!(tree.read(&RelativePath::lenient("a.svg")), Some("<svg/>  "));
    }

    #[test]
    fn skip_format_is_noop() {
        let formatter = MockCodeFormatter::new();
        assert!(format_files(&plan(true), Arc::new(formatter)).is_noop());
    }
}
