// ============================================================================
// domain/error.rs - GENERATION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand back to the CLI)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// The requested style is not one of the supported choices.
    #[error("Unsupported style option found: {style}. Valid values are: \"{}\"", .valid.join("\", \""))]
    InvalidStyle {
        style: String,
        valid: Vec<&'static str>,
    },

    /// The component name contains a path separator.
    #[error(
        "Found \"{separator}\" in the component name. Did you mean to use the --directory option (e.g. `fragment component {name} --directory {suggestion}`)?"
    )]
    InvalidName {
        separator: char,
        name: String,
        suggestion: String,
    },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    /// The destination project is not declared in the workspace file.
    #[error("Cannot find project '{project}'")]
    ProjectNotFound {
        project: String,
        known: Vec<String>,
    },

    // ========================================================================
    // Workspace shape violations
    // ========================================================================
    #[error("Invalid workspace configuration in {path}: {reason}")]
    InvalidWorkspace { path: String, reason: String },

    #[error("Invalid package manifest {path}: {reason}")]
    InvalidManifest { path: String, reason: String },

    // ========================================================================
    // Template shape violations
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Duplicate path in template: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidStyle { valid, .. } => {
                let mut out = vec!["Supported styles:".to_string()];
                out.extend(valid.iter().map(|s| format!("  • {s}")));
                out.push("Example: fragment component my-button --project ui --style scss".into());
                out
            }
            Self::InvalidName {
                name, suggestion, ..
            } => vec![
                "Component names cannot contain path separators".into(),
                format!("Try: fragment component {name} --directory {suggestion}"),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{field}'")]
            }
            Self::ProjectNotFound { project, known } => {
                let mut out = vec![format!("'{project}' is not declared in workspace.json")];
                if !known.is_empty() {
                    out.push(format!("Known projects: {}", known.join(", ")));
                }
                out
            }
            Self::InvalidWorkspace { path, .. } => vec![
                format!("Check that {path} exists and is valid JSON"),
                "Run the command from the workspace root or pass --workspace <DIR>".into(),
            ],
            Self::InvalidManifest { path, .. } => {
                vec![format!("{path} must contain a JSON object")]
            }
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Paths are resolved relative to the project source root".into()]
            }
            Self::InvalidTemplate(_) | Self::DuplicatePath { .. } => vec![
                "Check template.toml in your templates directory".into(),
                "Each template needs exactly one file with role = \"component\"".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidStyle { .. }
            | Self::InvalidName { .. }
            | Self::MissingRequiredField { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidWorkspace { .. }
            | Self::InvalidManifest { .. }
            | Self::InvalidTemplate(_)
            | Self::DuplicatePath { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
