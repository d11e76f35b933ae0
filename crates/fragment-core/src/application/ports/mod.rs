//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fragment-adapters` implement these.
//!
//! - `Filesystem`: snapshot the workspace, write changes back
//! - `TemplateRenderer`: render template sources against a `RenderContext`
//! - `CodeFormatter`: normalize generated files before they are written

use std::path::Path;

use crate::domain::{ProjectTree, RelativePath, RenderContext};
use crate::error::FragmentResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fragment_adapters::filesystem::LocalFilesystem` (production)
/// - `fragment_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read every text file under `root` into a tree keyed by paths
    /// relative to `root`. Directories whose name is in `ignore` are skipped.
    fn load_tree(&self, root: &Path, ignore: &[String]) -> FragmentResult<ProjectTree>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FragmentResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> FragmentResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `fragment_adapters::renderer::TeraRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one template source.
    ///
    /// `name` identifies the template in error messages.
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> FragmentResult<String>;
}

/// Port for the final formatting pass.
///
/// Implemented by:
/// - `fragment_adapters::formatter::BasicFormatter`
#[cfg_attr(test, mockall::automock)]
pub trait CodeFormatter: Send + Sync {
    /// Format one file. Returns `None` when the file type is not handled.
    fn format(&self, path: &RelativePath, content: &str) -> FragmentResult<Option<String>>;
}
