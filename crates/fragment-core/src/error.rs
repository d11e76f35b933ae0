//! Unified error handling for Fragment Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Fragment Core operations.
///
/// This enum wraps all possible errors that can occur when using fragment-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum FragmentError {
    /// Errors from the domain layer (invalid requests, unknown projects).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl FragmentError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run `fragment config path` to locate the config file".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Fragment".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The wrapped domain error, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

pub use crate::domain::ErrorCategory;

/// Convenient result type alias.
pub type FragmentResult<T> = Result<T, FragmentError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> FragmentResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> FragmentResult<T> {
        self.map_err(|e| FragmentError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
