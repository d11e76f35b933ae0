use serde_json::{Map, Value};

use crate::domain::{error::DomainError, styles::PackageDependencies};

/// Root package manifest path.
pub const PACKAGE_JSON: &str = "package.json";

/// A `package.json` document.
///
/// Only the `dependencies` and `devDependencies` sections are interpreted;
/// every other key is carried through untouched and in its original order.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    root: Map<String, Value>,
}

impl PackageManifest {
    pub fn empty() -> Self {
        Self { root: Map::new() }
    }

    pub fn parse(content: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| DomainError::InvalidManifest {
                path: PACKAGE_JSON.into(),
                reason: e.to_string(),
            })?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::InvalidManifest {
                path: PACKAGE_JSON.into(),
                reason: format!("expected an object, found {}", type_name(&other)),
            }),
        }
    }

    /// Merge a dependency set. Incoming versions replace existing ones and
    /// both sections end up sorted by package name.
    pub fn add_dependencies(&mut self, deps: &PackageDependencies) -> Result<(), DomainError> {
        merge_section(&mut self.root, "dependencies", deps.dependencies)?;
        merge_section(&mut self.root, "devDependencies", deps.dev_dependencies)?;
        Ok(())
    }

    pub fn dependency(&self, name: &str) -> Option<&str> {
        section_entry(&self.root, "dependencies", name)
    }

    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        section_entry(&self.root, "devDependencies", name)
    }

    /// Serialize with two-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.root).unwrap_or_else(|_| "{}".into());
        out.push('\n');
        out
    }
}

fn merge_section(
    root: &mut Map<String, Value>,
    key: &str,
    entries: &[(&str, &str)],
) -> Result<(), DomainError> {
    if entries.is_empty() {
        return Ok(());
    }

    let slot = root
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(section) = slot else {
        return Err(DomainError::InvalidManifest {
            path: PACKAGE_JSON.into(),
            reason: format!("\"{key}\" must be an object"),
        });
    };

    for (name, version) in entries {
        section.insert((*name).to_string(), Value::String((*version).to_string()));
    }
    section.sort_keys();
    Ok(())
}

fn section_entry<'a>(root: &'a Map<String, Value>, key: &str, name: &str) -> Option<&'a str> {
    root.get(key)?.get(name)?.as_str()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
