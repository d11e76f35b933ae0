use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{
    entities::{common::RelativePath, tree::ProjectTree},
    error::DomainError,
    value_objects::ProjectType,
};

/// Workspace description files, in lookup order.
pub const WORKSPACE_FILES: [&str; 2] = ["workspace.json", "angular.json"];

/// One project as declared in the workspace file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub root: RelativePath,
    pub source_root: RelativePath,
    pub project_type: ProjectType,
}

/// The `projects` section of `workspace.json`.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceConfig {
    projects: BTreeMap<String, ProjectConfig>,
}

#[derive(Debug, Deserialize)]
struct RawWorkspace {
    #[serde(default)]
    projects: BTreeMap<String, RawProject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    #[serde(default)]
    root: String,
    source_root: Option<String>,
    #[serde(default)]
    project_type: ProjectType,
}

impl WorkspaceConfig {
    /// Read the workspace description from the tree.
    pub fn from_tree(tree: &ProjectTree) -> Result<Self, DomainError> {
        for file in WORKSPACE_FILES {
            if let Some(content) = tree.read(&RelativePath::lenient(file)) {
                return Self::parse(file, content);
            }
        }
        Err(DomainError::InvalidWorkspace {
            path: WORKSPACE_FILES[0].into(),
            reason: format!("none of {} found", WORKSPACE_FILES.join(", ")),
        })
    }

    /// Parse `workspace.json` content.
    pub fn parse(path: &str, content: &str) -> Result<Self, DomainError> {
        let raw: RawWorkspace =
            serde_json::from_str(content).map_err(|e| DomainError::InvalidWorkspace {
                path: path.into(),
                reason: e.to_string(),
            })?;

        let mut projects = BTreeMap::new();
        for (name, project) in raw.projects {
            let root = RelativePath::try_new(&project.root).map_err(|_| {
                DomainError::InvalidWorkspace {
                    path: path.into(),
                    reason: format!("project '{name}' has an absolute root"),
                }
            })?;
            let source_root = match project.source_root {
                Some(src) => RelativePath::lenient(src),
                None => root.join("src"),
            };
            projects.insert(
                name.clone(),
                ProjectConfig {
                    name,
                    root,
                    source_root,
                    project_type: project.project_type,
                },
            );
        }

        Ok(Self { projects })
    }

    pub fn project(&self, name: &str) -> Result<&ProjectConfig, DomainError> {
        self.projects
            .get(name)
            .ok_or_else(|| DomainError::ProjectNotFound {
                project: name.to_string(),
                known: self.projects.keys().cloned().collect(),
            })
    }

    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }
}
