//! Infrastructure adapters for Fragment.
//!
//! This crate implements the ports defined in `fragment-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod formatter;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use builtin_templates::react_component;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::BasicFormatter;
pub use renderer::TeraRenderer;
pub use template_loader::FilesystemTemplateLoader;
