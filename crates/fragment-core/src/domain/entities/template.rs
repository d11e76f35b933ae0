//! Component template model.
//!
//! A [`TemplateSet`] is the fixed list of files one generation emits. Each
//! [`TemplateFile`] carries a path pattern and a content source, both
//! rendered against a `RenderContext`, plus a [`FileRole`] the
//! materializer uses to decide whether the file is emitted at all.

use std::fmt;

use crate::domain::error::DomainError;

/// Why a file exists in the set. Drives the skip-tests and stylesheet filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    /// The component module itself. Always emitted.
    Component,
    /// Sibling stylesheet. Dropped for CSS-in-JS and `none`.
    Stylesheet,
    /// Unit test. Dropped with `skip_tests`.
    Spec,
}

impl FileRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Stylesheet => "stylesheet",
            Self::Spec => "spec",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FileRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "stylesheet" | "style" => Ok(Self::Stylesheet),
            "spec" | "test" => Ok(Self::Spec),
            other => Err(DomainError::InvalidTemplate(format!(
                "unknown file role: {other}"
            ))),
        }
    }
}

/// Source of template content: either compile-time or runtime.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g., `include_str!("component.tsx.tera")`)
    Static(&'static str),

    /// Runtime-owned string (loaded from a templates directory)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// One file of a component template.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Output path pattern relative to the component directory, e.g.
    /// `{{ file_name }}.spec.tsx`. Rendered like content.
    pub path: String,
    pub content: TemplateSource,
    pub role: FileRole,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, content: impl Into<TemplateSource>, role: FileRole) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            role,
        }
    }
}

/// The fixed file set of one component template.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub name: String,
    pub files: Vec<TemplateFile>,
}

impl TemplateSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: TemplateFile) -> Self {
        self.files.push(file);
        self
    }

    /// A usable set has exactly one component file and unique path patterns.
    pub fn validate(&self) -> Result<(), DomainError> {
        let components = self
            .files
            .iter()
            .filter(|f| f.role == FileRole::Component)
            .count();
        if components != 1 {
            return Err(DomainError::InvalidTemplate(format!(
                "template '{}' must declare exactly one component file, found {components}",
                self.name
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component() -> TemplateFile {
        TemplateFile::new("{{ file_name }}.tsx", "x", FileRole::Component)
    }

    #[test]
    fn valid_set() {
        let set = TemplateSet::new("react")
            .with_file(component())
            .with_file(TemplateFile::new("{{ file_name }}.spec.tsx", "y", FileRole::Spec));
        assert!(set.validate().is_ok());
    }

    #[test]
    fn requires_one_component() {
        let set = TemplateSet::new("empty");
        assert!(set.validate().is_err());

        let twice = TemplateSet::new("twice")
            .with_file(component())
            .with_file(TemplateFile::new("other.tsx", "x", FileRole::Component));
        assert!(twice.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_paths() {
        let set = TemplateSet::new("dup")
            .with_file(component())
            .with_file(TemplateFile::new("{{ file_name }}.tsx", "y", FileRole::Spec));
        assert!(matches!(set.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn roles_parse() {
        assert_eq!("stylesheet".parse::<FileRole>().unwrap(), FileRole::Stylesheet);
        assert_eq!("Spec".parse::<FileRole>().unwrap(), FileRole::Spec);
        assert!("readme".parse::<FileRole>().is_err());
    }
}
