//! Barrel (index file) re-exports.
//!
//! The barrel is scanned as a sequence of top-level statements, just
//! enough to find where the last `import` declaration ends. Strings,
//! template literals, comments and bracketed blocks are skipped so that
//! an `import` inside them is never mistaken for a declaration.

use tracing::{debug, info};

use crate::{
    application::rules::{Rule, noop},
    domain::NormalizedPlan,
};

/// Add `export * from './<directory>/<file_name>';` to the project barrel.
///
/// No-op unless `export` is set on a library. A missing barrel file is
/// left missing; a barrel already holding the statement is left as is.
pub fn export_to_barrel(plan: &NormalizedPlan) -> Rule {
    if !plan.export || plan.project_type.is_application() {
        return noop();
    }

    let path = plan.barrel_path();
    let statement = plan.export_statement();

    Rule::transform("barrel-export", move |tree| {
        let Some(source) = tree.read(&path) else {
            debug!(path = %path, "No barrel file, skipping export");
            return Ok(());
        };
        if source.lines().any(|line| line.trim() == statement) {
            debug!(path = %path, "Barrel already exports component");
            return Ok(());
        }

        let updated = insert_statement(source, &statement);
        info!(path = %path, "Added export to barrel");
        tree.write(path, updated);
        Ok(())
    })
}

/// Insert `statement` on its own line after the last top-level import, or
/// at the end of the file when there is none. Existing text is kept
/// byte-for-byte.
pub fn insert_statement(source: &str, statement: &str) -> String {
    let Some(end) = last_import_end(source) else {
        return append_line(source, statement);
    };

    match source[end..].find('\n') {
        Some(offset) => {
            let at = end + offset + 1;
            format!("{}{statement}\n{}", &source[..at], &source[at..])
        }
        None => append_line(source, statement),
    }
}

fn append_line(source: &str, statement: &str) -> String {
    let mut out = String::with_capacity(source.len() + statement.len() + 2);
    out.push_str(source);
    if !source.is_empty() && !source.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(statement);
    out.push('\n');
    out
}

// ── Scanner ───────────────────────────────────────────────────────────────────

/// Byte offset just past the last top-level import declaration.
///
/// A `/` where an operand is expected starts a regex literal; elsewhere it
/// is division.
pub fn last_import_end(source: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut scanner = Scanner { bytes, pos: 0 };
    let mut depth = 0usize;
    let mut last = None;
    let mut expects_operand = true;

    while let Some(b) = scanner.peek() {
        if scanner.skip_trivia_or_literal() {
            if matches!(b, b'\'' | b'"' | b'`') {
                expects_operand = false;
            }
            continue;
        }
        match b {
            b'/' if expects_operand => {
                scanner.regex();
                expects_operand = false;
            }
            b'{' | b'(' | b'[' => {
                depth += 1;
                scanner.pos += 1;
                expects_operand = true;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                scanner.pos += 1;
                expects_operand = true;
            }
            b')' | b']' => {
                depth = depth.saturating_sub(1);
                scanner.pos += 1;
                expects_operand = false;
            }
            _ if is_ident_start(b) || b.is_ascii_digit() => {
                let start = scanner.pos;
                let word = scanner.ident();
                let after_dot = start > 0 && bytes[start - 1] == b'.';
                if depth == 0 && word == "import" && !after_dot && scanner.starts_declaration() {
                    last = Some(scanner.import_declaration_end());
                    expects_operand = true;
                } else {
                    expects_operand = !after_dot && OPERAND_KEYWORDS.contains(&word);
                }
            }
            _ => {
                scanner.pos += 1;
                expects_operand = true;
            }
        }
    }

    last
}

/// Keywords after which a `/` begins a regex literal.
const OPERAND_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case", "do",
    "else", "yield", "await",
];

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Skip whitespace, a comment or a string/template literal at the
    /// cursor. Returns `true` if anything was consumed.
    fn skip_trivia_or_literal(&mut self) -> bool {
        match (self.peek(), self.peek_at(1)) {
            (Some(b), _) if b.is_ascii_whitespace() => {
                self.pos += 1;
                true
            }
            (Some(b'/'), Some(b'/')) => {
                while let Some(b) = self.peek() {
                    if b == b'\n' {
                        break;
                    }
                    self.pos += 1;
                }
                true
            }
            (Some(b'/'), Some(b'*')) => {
                self.pos += 2;
                while self.pos < self.bytes.len() {
                    if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                        self.pos += 2;
                        return true;
                    }
                    self.pos += 1;
                }
                true
            }
            (Some(quote @ (b'\'' | b'"' | b'`')), _) => {
                self.string(quote);
                true
            }
            _ => false,
        }
    }

    /// Consume a quoted literal, honoring backslash escapes.
    fn string(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(b) = self.peek() {
            self.pos += 1;
            match b {
                b'\\' => self.pos += 1,
                _ if b == quote => return,
                _ => {}
            }
        }
        self.pos = self.pos.min(self.bytes.len());
    }

    /// Consume a regex literal, including `[...]` classes that may hold an
    /// unescaped `/`. Stops at a line break when the literal is unterminated.
    fn regex(&mut self) {
        self.pos += 1;
        let mut in_class = false;
        while let Some(b) = self.peek() {
            match b {
                b'\n' => return,
                b'\\' => self.pos += 1,
                b'[' => in_class = true,
                b']' => in_class = false,
                b'/' if !in_class => {
                    self.pos += 1;
                    return;
                }
                _ => {}
            }
            self.pos += 1;
        }
        self.pos = self.pos.min(self.bytes.len());
    }

    fn ident(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let bytes: &'a [u8] = self.bytes;
        std::str::from_utf8(&bytes[start..self.pos]).unwrap_or_default()
    }

    /// `import(...)` and `import.meta` are expressions, not declarations.
    fn starts_declaration(&self) -> bool {
        let mut i = self.pos;
        while self.bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        !matches!(self.bytes.get(i), Some(b'(' | b'.'))
    }

    /// Advance past the module specifier of the import at the cursor and an
    /// optional trailing semicolon.
    fn import_declaration_end(&mut self) -> usize {
        let mut depth = 0usize;
        while let Some(b) = self.peek() {
            match b {
                b'\'' | b'"' if depth == 0 => {
                    self.string(b);
                    self.skip_inline_space();
                    if self.peek() == Some(b';') {
                        self.pos += 1;
                    }
                    return self.pos;
                }
                b';' if depth == 0 => {
                    self.pos += 1;
                    return self.pos;
                }
                b'{' | b'(' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' | b')' => {
                    depth = depth.saturating_sub(1);
                    self.pos += 1;
                }
                _ => {
                    if !self.skip_trivia_or_literal() {
                        self.pos += 1;
                    }
                }
            }
        }
        self.pos
    }

    fn skip_inline_space(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileAction, ProjectTree, ProjectType, RelativePath, Style};

    const STATEMENT: &str = "export * from './lib/foo-bar/foo-bar';";

    fn plan(project_type: ProjectType, export: bool, js: bool) -> NormalizedPlan {
        NormalizedPlan {
            name: "foo-bar".into(),
            project: "ui".into(),
            project_type,
            project_source_root: RelativePath::lenient("ui/src"),
            directory: RelativePath::lenient("lib/foo-bar"),
            file_name: "foo-bar".into(),
            class_name: "FooBar".into(),
            style: Style::Css,
            styled_module: None,
            has_styles: true,
            skip_tests: false,
            export,
            js,
            routing: false,
            skip_format: false,
        }
    }

    #[test]
    fn inserts_after_last_import() {
        let source = "import './polyfills';\nimport { a } from './a';\n\nexport const b = a;\n";
        assert_eq!(
            insert_statement(source, STATEMENT),
            format!("import './polyfills';\nimport {{ a }} from './a';\n{STATEMENT}\n\nexport const b = a;\n")
        );
    }

    #[test]
    fn appends_when_no_imports() {
        let source = "export * from './lib/other/other';";
        assert_eq!(
            insert_statement(source, STATEMENT),
            format!("export * from './lib/other/other';\n{STATEMENT}\n")
        );
        assert_eq!(insert_statement("", STATEMENT), format!("{STATEMENT}\n"));
    }

    #[test]
    fn multiline_and_unterminated_imports() {
        let source = "import {\n  a,\n  b,\n} from './ab'\nconst x = 1;\n";
        let end = last_import_end(source).unwrap();
        assert_eq!(&source[..end], "import {\n  a,\n  b,\n} from './ab'");
    }

    #[test]
    fn ignores_imports_in_comments_strings_and_blocks() {
        let source = concat!(
            "import React from 'react';\n",
            "// import nope from 'nope';\n",
            "/* import nope from 'nope'; */\n",
            "const s = \"import x from 'y'\";\n",
            "const t = `import ${s}`;\n",
            "function f() { import('./lazy'); }\n",
            "const meta = import.meta;\n",
        );
        let end = last_import_end(source).unwrap();
        assert_eq!(&source[..end], "import React from 'react';");
    }

    #[test]
    fn regex_literals_do_not_hide_imports() {
        let source = concat!(
            "import a from './a';\n",
            "const re = /'/;\n",
            "const cls = /[/\"]+/g;\n",
            "import b from './b';\n",
            "const half = a / 2 / 1;\n",
            "export { b, half };\n",
        );
        let end = last_import_end(source).unwrap();
        assert!(source[..end].ends_with("import b from './b';"));
        assert_eq!(
            insert_statement(source, STATEMENT),
            source.replace(
                "import b from './b';\n",
                &format!("import b from './b';\n{STATEMENT}\n")
            )
        );
    }

    #[test]
    fn non_ascii_content_is_preserved() {
        let source = "// héllo ✓\nimport a from 'a';\nexport const é = a;\n";
        let out = insert_statement(source, STATEMENT);
        assert!(out.starts_with("// héllo ✓\nimport a from 'a';\n"));
        assert!(out.ends_with("export const é = a;\n"));
    }

    #[test]
    fn rule_updates_existing_barrel() {
        let original = "export * from './lib/ui';\n";
        let mut tree = ProjectTree::new().with_file("ui/src/index.ts", original);
        export_to_barrel(&plan(ProjectType::Library, true, false))
            .apply(&mut tree)
            .unwrap();

        let path = RelativePath::lenient("ui/src/index.ts");
        let content = tree.read(&path).unwrap();
        assert!(content.contains(original));
        assert_eq!(content.len(), original.len() + STATEMENT.len() + 1);
        assert_eq!(tree.action(&path), Some(FileAction::Update));
    }

    #[test]
    fn rule_is_idempotent() {
        let mut tree = ProjectTree::new().with_file("ui/src/index.ts", "");
        for _ in 0..2 {
            export_to_barrel(&plan(ProjectType::Library, true, false))
                .apply(&mut tree)
                .unwrap();
        }
        let content = tree.read(&RelativePath::lenient("ui/src/index.ts")).unwrap();
        assert_eq!(content.matches(STATEMENT).count(), 1);
    }

    #[test]
    fn missing_barrel_is_silent() {
        let mut tree = ProjectTree::new();
        export_to_barrel(&plan(ProjectType::Library, true, false))
            .apply(&mut tree)
            .unwrap();
        assert!(!tree.has_changes());
    }

    #[test]
    fn js_uses_index_js() {
        let mut tree = ProjectTree::new()
            .with_file("ui/src/index.ts", "")
            .with_file("ui/src/index.js", "");
        export_to_barrel(&plan(ProjectType::Library, true, true))
            .apply(&mut tree)
            .unwrap();
        assert!(tree.action(&RelativePath::lenient("ui/src/index.js")).is_some());
        assert!(tree.action(&RelativePath::lenient("ui/src/index.ts")).is_none());
    }

    #[test]
    fn applications_and_unset_flag_are_noops() {
        assert!(export_to_barrel(&plan(ProjectType::Application, true, false)).is_noop());
        assert!(export_to_barrel(&plan(ProjectType::Library, false, false)).is_noop());
    }
}
