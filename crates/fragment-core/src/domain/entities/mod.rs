pub mod common;
pub mod manifest;
pub mod plan;
pub mod request;
pub mod template;
pub mod tree;
pub mod workspace;

pub use crate::domain::DomainError;
pub use manifest::{PACKAGE_JSON, PackageManifest};
pub use plan::{NormalizedPlan, RenderContext};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use template::{FileRole, TemplateFile, TemplateSet, TemplateSource};
pub use tree::{FileAction, FileChange, ProjectTree};
pub use workspace::{ProjectConfig, WORKSPACE_FILES, WorkspaceConfig};
