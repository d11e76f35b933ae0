//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use fragment_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectTree, RelativePath},
    error::{FragmentError, FragmentResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    #[instrument(skip(self, ignore), fields(root = %root.display()))]
    fn load_tree(&self, root: &Path, ignore: &[String]) -> FragmentResult<ProjectTree> {
        let mut tree = ProjectTree::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry, ignore));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                FragmentError::from(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to walk directory: {e}"),
                })
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            match std::fs::read_to_string(entry.path()) {
                Ok(content) => {
                    tree.insert_original(RelativePath::lenient(relative.to_string_lossy()), content);
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!(path = %relative.display(), "Skipping non-UTF-8 file");
                }
                Err(e) => return Err(map_io_error(entry.path(), e, "read file")),
            }
        }

        debug!(files = tree.file_count(), "Workspace snapshot loaded");
        Ok(tree)
    }

    fn create_dir_all(&self, path: &Path) -> FragmentResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FragmentResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn is_ignored(entry: &DirEntry, ignore: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore.iter().any(|i| i == name))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FragmentError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_text_files_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ui/src")).unwrap();
        fs::write(dir.path().join("workspace.json"), "{}").unwrap();
        fs::write(dir.path().join("ui/src/index.ts"), "export {};\n").unwrap();

        let tree = LocalFilesystem::new().load_tree(dir.path(), &[]).unwrap();
        assert_eq!(tree.file_count(), 2);
        assert_eq!(
            tree.read(&RelativePath::lenient("ui/src/index.ts")),
            Some("export {};\n")
        );
        assert!(!tree.has_changes());
    }

    #[test]
    fn skips_ignored_directories_and_binary_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::write(dir.path().join("node_modules/react/index.js"), "x").unwrap();
        fs::write(dir.path().join("logo.png"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        let tree = LocalFilesystem::new()
            .load_tree(dir.path(), &["node_modules".to_string()])
            .unwrap();
        let paths: Vec<&str> = tree.paths().map(RelativePath::as_str).collect();
        assert_eq!(paths, vec!["package.json"]);
    }

    #[test]
    fn writes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs_adapter = LocalFilesystem::new();
        let target = dir.path().join("a/b/c.ts");

        fs_adapter.create_dir_all(target.parent().unwrap()).unwrap();
        fs_adapter.write_file(&target, "hello").unwrap();

        assert!(fs_adapter.exists(&target));
        assert_eq!(fs::read_to_string(target).unwrap(), "hello");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&dir.path().join("missing/x.ts"), "")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
