//! Filesystem-based template loader.
//!
//! Parses a `template.toml` manifest and the template sources it names,
//! producing a [`TemplateSet`] that replaces the embedded React templates.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! ├── template.toml            ← manifest (required)
//! ├── component.tsx.tera
//! ├── component.spec.tsx.tera
//! └── styles/
//!     └── stylesheet.tera
//! ```
//!
//! # `template.toml` format
//!
//! ```toml
//! [template]
//! name = "react-component"
//!
//! [[files]]
//! path   = "{{ file_name }}.tsx"   # output path, rendered like content
//! source = "component.tsx.tera"    # relative to the manifest
//! role   = "component"             # component | stylesheet | spec
//! ```

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use fragment_core::{
    application::ApplicationError,
    domain::{DomainError, DomainValidator, FileRole, TemplateFile, TemplateSet},
    error::{FragmentError, FragmentResult},
};

/// Manifest file name.
pub const MANIFEST: &str = "template.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a `template.toml` file.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateManifest {
    pub template: TemplateSection,
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// `[template]` section: identity of the set.
#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSection {
    pub name: String,
    pub description: Option<String>,
}

/// One entry under `[[files]]`.
#[derive(Debug, Deserialize, Clone)]
pub struct FileEntry {
    /// Output path pattern relative to the component directory.
    pub path: String,
    /// Template source, relative to the manifest directory.
    pub source: String,
    /// `component`, `stylesheet` or `spec`.
    pub role: String,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`TemplateSet`] from a directory holding `template.toml`.
///
/// # Example
///
/// ```no_run
/// use fragment_adapters::template_loader::FilesystemTemplateLoader;
///
/// let set = FilesystemTemplateLoader::new("./my-templates").load()?;
/// println!("Loaded {} files", set.files.len());
/// # Ok::<(), fragment_core::error::FragmentError>(())
/// ```
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    ///
    /// The directory does not need to exist yet; [`load`](Self::load)
    /// returns an error if it is missing when called.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Read the manifest and every source it references.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::TemplateLoad`] when the directory or manifest is
    /// missing or unreadable, a role is unknown, or a source cannot be read.
    /// The resulting set is validated before it is returned.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load(&self) -> FragmentResult<TemplateSet> {
        if !self.templates_dir.is_dir() {
            return Err(self.error("templates directory not found"));
        }

        let manifest_path = self.templates_dir.join(MANIFEST);
        let raw = fs::read_to_string(&manifest_path)
            .map_err(|e| self.error(format!("failed to read {MANIFEST}: {e}")))?;
        let manifest: TemplateManifest = toml::from_str(&raw)
            .map_err(|e| self.error(format!("failed to parse {MANIFEST}: {e}")))?;

        let mut set = TemplateSet::new(&manifest.template.name);
        let mut referenced = BTreeSet::new();
        for entry in &manifest.files {
            let role: FileRole = entry
                .role
                .parse()
                .map_err(|e: DomainError| self.error(e.to_string()))?;
            let source_path = self.templates_dir.join(&entry.source);
            let content = fs::read_to_string(&source_path)
                .map_err(|e| self.error(format!("failed to read '{}': {e}", entry.source)))?;

            debug!(path = %entry.path, source = %entry.source, %role, "template file");
            referenced.insert(normalize_path(&entry.source));
            set = set.with_file(TemplateFile::new(&entry.path, content, role));
        }

        self.warn_unreferenced(&referenced);
        DomainValidator::validate_template_set(&set)?;
        Ok(set)
    }

    /// Sources sitting next to the manifest but never listed are most
    /// likely typos in `source = ...`.
    fn warn_unreferenced(&self, referenced: &BTreeSet<String>) {
        for entry in WalkDir::new(&self.templates_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let Ok(rel) = entry.path().strip_prefix(&self.templates_dir) else {
                continue;
            };
            let rel = normalize_path(&rel.to_string_lossy());
            if rel != MANIFEST && !referenced.contains(&rel) {
                warn!(file = %rel, "template file not referenced by {MANIFEST}");
            }
        }
    }

    fn error(&self, reason: impl Into<String>) -> FragmentError {
        ApplicationError::TemplateLoad {
            path: self.templates_dir.clone(),
            reason: reason.into(),
        }
        .into()
    }
}

/// Convert OS path separators to forward slashes and drop a leading `./`.
fn normalize_path(s: &str) -> String {
    let s = s.replace('\\', "/");
    s.strip_prefix("./").map(str::to_string).unwrap_or(s)
}

/// Copy the embedded React templates into `dir` so they can be customised.
///
/// Existing files are only replaced when `force` is set.
pub fn export_builtin(dir: &Path, force: bool) -> FragmentResult<Vec<PathBuf>> {
    let files: [(&str, &str); 4] = [
        (MANIFEST, include_str!("../templates/react-component/template.toml")),
        (
            "component.tsx.tera",
            include_str!("../templates/react-component/component.tsx.tera"),
        ),
        (
            "component.spec.tsx.tera",
            include_str!("../templates/react-component/component.spec.tsx.tera"),
        ),
        (
            "stylesheet.tera",
            include_str!("../templates/react-component/stylesheet.tera"),
        ),
    ];

    let io_err = |path: &Path, e: std::io::Error| -> FragmentError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    };

    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    let mut written = Vec::new();
    for (name, content) in files {
        let path = dir.join(name);
        if path.exists() && !force {
            debug!(path = %path.display(), "exists, keeping");
            continue;
        }
        fs::write(&path, content).map_err(|e| io_err(&path, e))?;
        written.push(path);
    }
    Ok(written)
}
