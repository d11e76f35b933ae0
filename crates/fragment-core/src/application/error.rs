//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! request itself. Request errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("Template rendering failed for {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// A template directory could not be loaded.
    #[error("Failed to load templates from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    /// The formatter rejected a generated file.
    #[error("Failed to format {path}: {reason}")]
    FormattingFailed { path: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The workspace root does not exist or is not a directory.
    #[error("Workspace root not found: {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// Shared in-memory state was poisoned by a panicking writer.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the syntax of {template}"),
                "Templates use Tera syntax: {{ class_name }}, {% if js %}...{% endif %}".into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Check that {} contains a template.toml", path.display()),
                "Remove --templates to use the built-in React templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::WorkspaceNotFound { path } => vec![
                format!("No directory at {}", path.display()),
                "Run from the workspace root or pass --workspace <DIR>".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { .. } => ErrorCategory::Configuration,
            Self::WorkspaceNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. }
            | Self::FormattingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
