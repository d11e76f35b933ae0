use crate::domain::{entities::TemplateSet, error::DomainError};

/// Characters that would turn a component name into a path.
const NAME_SEPARATORS: [char; 2] = ['/', '\\'];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A component name must be non-empty and must not contain a path
    /// separator. The error carries a `--directory` suggestion built from
    /// the name's leading segments, lowercased and prefixed with the
    /// directory the caller already passed.
    pub fn validate_component_name(name: &str, directory: Option<&str>) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }

        let Some(separator) = NAME_SEPARATORS.into_iter().find(|s| name.contains(*s)) else {
            return Ok(());
        };

        let mut segments: Vec<&str> = name.split(separator).collect();
        let last = segments.pop().unwrap_or_default();
        let lowered = segments.join(&separator.to_string()).to_lowercase();
        let suggestion = match directory {
            Some(existing) => format!("{existing}{separator}{lowered}"),
            None => lowered,
        };

        Err(DomainError::InvalidName {
            separator,
            name: last.to_string(),
            suggestion,
        })
    }

    pub fn validate_project_name(project: &str) -> Result<(), DomainError> {
        if project.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "project" });
        }
        Ok(())
    }

    pub fn validate_template_set(set: &TemplateSet) -> Result<(), DomainError> {
        set.validate()
    }
}
