use std::{collections::BTreeMap, fmt};

use crate::domain::entities::common::RelativePath;

/// What a generation run did to one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Update,
}

impl FileAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded change, as reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: RelativePath,
    pub action: FileAction,
    pub content: String,
}

/// In-memory view of a workspace's text files.
///
/// The tree starts as a snapshot of the workspace and records every write
/// made through [`ProjectTree::write`]. Nothing here touches the disk; the
/// application layer persists [`ProjectTree::changes`] through the
/// `Filesystem` port.
#[derive(Debug, Clone, Default)]
pub struct ProjectTree {
    files: BTreeMap<RelativePath, String>,
    actions: BTreeMap<RelativePath, FileAction>,
}

impl ProjectTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file as part of the original snapshot (not recorded as a change).
    pub fn insert_original(&mut self, path: RelativePath, content: impl Into<String>) {
        self.files.insert(path, content.into());
    }

    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.insert_original(RelativePath::lenient(path), content);
        self
    }

    pub fn read(&self, path: &RelativePath) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn exists(&self, path: &RelativePath) -> bool {
        self.files.contains_key(path)
    }

    /// Create or overwrite a file, recording the change.
    ///
    /// A path created earlier in the same run stays a `Create`.
    pub fn write(&mut self, path: RelativePath, content: impl Into<String>) {
        let action = match self.actions.get(&path) {
            Some(FileAction::Create) => FileAction::Create,
            _ if self.files.contains_key(&path) => FileAction::Update,
            _ => FileAction::Create,
        };
        self.actions.insert(path.clone(), action);
        self.files.insert(path, content.into());
    }

    /// Paths touched during this run, in sorted order.
    pub fn touched(&self) -> impl Iterator<Item = &RelativePath> {
        self.actions.keys()
    }

    /// Every recorded change with its final content.
    pub fn changes(&self) -> Vec<FileChange> {
        self.actions
            .iter()
            .filter_map(|(path, action)| {
                self.files.get(path).map(|content| FileChange {
                    path: path.clone(),
                    action: *action,
                    content: content.clone(),
                })
            })
            .collect()
    }

    pub fn action(&self, path: &RelativePath) -> Option<FileAction> {
        self.actions.get(path).copied()
    }

    pub fn has_changes(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.files.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> RelativePath {
        RelativePath::lenient(s)
    }

    #[test]
    fn snapshot_files_are_not_changes() {
        let tree = ProjectTree::new().with_file("package.json", "{}");
        assert!(tree.exists(&p("package.json")));
        assert!(!tree.has_changes());
    }

    #[test]
    fn writes_record_create_and_update() {
        let mut tree = ProjectTree::new().with_file("ui/src/index.ts", "");
        tree.write(p("ui/src/index.ts"), "export * from './a';\n");
        tree.write(p("ui/src/lib/a.tsx"), "x");

        assert_eq!(tree.action(&p("ui/src/index.ts")), Some(FileAction::Update));
        assert_eq!(tree.action(&p("ui/src/lib/a.tsx")), Some(FileAction::Create));
        assert_eq!(tree.changes().len(), 2);
    }

    #[test]
    fn rewriting_a_new_file_stays_create() {
        let mut tree = ProjectTree::new();
        tree.write(p("a.ts"), "1");
        tree.write(p("a.ts"), "2");
        assert_eq!(tree.action(&p("a.ts")), Some(FileAction::Create));
        assert_eq!(tree.read(&p("a.ts")), Some("2"));
    }

    #[test]
    fn changes_are_sorted_by_path() {
        let mut tree = ProjectTree::new();
        tree.write(p("b.ts"), "");
        tree.write(p("a.ts"), "");
        let paths: Vec<_> = tree.changes().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec![p("a.ts"), p("b.ts")]);
    }
}
