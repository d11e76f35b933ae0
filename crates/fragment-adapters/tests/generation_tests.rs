//! Generation through the real adapters: Tera rendering, the built-in
//! React templates and `BasicFormatter`.

use fragment_adapters::{BasicFormatter, MemoryFilesystem, TeraRenderer, react_component};
use fragment_core::prelude::*;

const WORKSPACE_JSON: &str =
    r#"{"projects":{"ui":{"root":"libs/ui","sourceRoot":"libs/ui/src","projectType":"library"}}}"#;

fn service() -> GeneratorService {
    GeneratorService::new(
        Box::new(MemoryFilesystem::new()),
        Box::new(TeraRenderer::new()),
        Box::new(BasicFormatter::new()),
        react_component(),
    )
}

fn generate_with_barrel(barrel: &str) -> GenerationOutcome {
    let tree = ProjectTree::new()
        .with_file("workspace.json", WORKSPACE_JSON)
        .with_file("libs/ui/src/index.ts", barrel);
    let request = GenerationRequest::builder("foo-bar", "ui")
        .export(true)
        .build();
    service().generate(&request, tree).unwrap()
}

fn barrel(outcome: &GenerationOutcome) -> &str {
    outcome
        .tree
        .read(&RelativePath::lenient("libs/ui/src/index.ts"))
        .unwrap()
}

#[test]
fn crlf_barrel_keeps_its_line_endings() {
    let original = "export * from './lib/a/a';\r\nexport * from './lib/b/b';\r\n";
    let outcome = generate_with_barrel(original);

    let content = barrel(&outcome);
    assert!(content.starts_with(original));
    assert!(content.ends_with("export * from './lib/foo-bar/foo-bar';\n"));
}

#[test]
fn barrel_whitespace_survives_formatting() {
    let original = "import './styles';\n\n\n// section B   \nexport const B = 1;   \n\n\n";
    let outcome = generate_with_barrel(original);

    let content = barrel(&outcome);
    assert_eq!(
        content,
        "import './styles';\nexport * from './lib/foo-bar/foo-bar';\n\n\n// section B   \nexport const B = 1;   \n\n\n"
    );
    assert_eq!(content.len(), original.len() + "export * from './lib/foo-bar/foo-bar';\n".len());
}

#[test]
fn created_files_are_still_formatted() {
    let outcome = generate_with_barrel("");

    for change in outcome.changes() {
        if change.action != FileAction::Create {
            continue;
        }
        let content = outcome.tree.read(&change.path).unwrap();
        assert!(!content.contains(" \n"), "{} has trailing spaces", change.path);
        assert!(!content.contains("\n\n\n"), "{} has blank runs", change.path);
    }
}
