//! Generator Service - main application orchestrator.
//!
//! This service coordinates one component generation:
//! 1. Snapshot the workspace into a `ProjectTree`
//! 2. Normalize the request against the workspace
//! 3. Compose and apply the generation rules
//! 4. Write created/updated files back (unless dry-run)

use std::{path::Path, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CodeFormatter, Filesystem, TemplateRenderer},
        rules::chain,
        steps::{
            Normalized, add_routing_dependencies, add_style_dependencies, export_to_barrel,
            format_files, materialize_template, normalize_options,
        },
    },
    domain::{
        DomainValidator as validator, FileChange, GenerationRequest, NormalizedPlan, PACKAGE_JSON,
        ProjectTree, RelativePath, TemplateSet,
    },
    error::FragmentResult,
};

/// Directory names never read into the workspace snapshot.
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", ".git", "dist", "tmp", "coverage"];

/// Result of one generation.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The workspace after every rule ran.
    pub tree: ProjectTree,
    pub plan: NormalizedPlan,
    /// Non-fatal findings, e.g. `--export` on an application.
    pub warnings: Vec<String>,
    /// `package.json` was created or updated.
    pub install_required: bool,
}

impl GenerationOutcome {
    pub fn changes(&self) -> Vec<FileChange> {
        self.tree.changes()
    }
}

/// Main generation service.
///
/// Orchestrates the normalize, materialize, declare, export and format
/// steps against a workspace.
pub struct GeneratorService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    formatter: Arc<dyn CodeFormatter>,
    templates: TemplateSet,
    ignore: Vec<String>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fragment_core::application::GeneratorService;
    ///
    /// let service = GeneratorService::new(
    ///     filesystem, // impl Filesystem
    ///     renderer,   // impl TemplateRenderer
    ///     formatter,  // impl CodeFormatter
    ///     templates,  // TemplateSet
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        formatter: Box<dyn CodeFormatter>,
        templates: TemplateSet,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            formatter: Arc::from(formatter),
            templates,
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the directory names skipped when snapshotting the workspace.
    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Generate a component in the workspace at `root`.
    ///
    /// With `dry_run` nothing is written; the outcome still lists every
    /// change that would have been made.
    #[instrument(
        skip_all,
        fields(
            name = %request.name,
            project = %request.project,
            root = %root.display(),
            dry_run = dry_run
        )
    )]
    pub fn run(
        &self,
        request: &GenerationRequest,
        root: &Path,
        dry_run: bool,
    ) -> FragmentResult<GenerationOutcome> {
        if !self.filesystem.exists(root) {
            return Err(ApplicationError::WorkspaceNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let tree = self.filesystem.load_tree(root, &self.ignore)?;
        info!(files = tree.file_count(), "Loaded workspace snapshot");

        let outcome = self.generate(request, tree)?;

        if dry_run {
            info!("Dry run, no files written");
        } else {
            self.commit(root, &outcome.tree)?;
        }
        Ok(outcome)
    }

    /// Run every generation step against `tree`. Pure with respect to the
    /// filesystem.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        mut tree: ProjectTree,
    ) -> FragmentResult<GenerationOutcome> {
        validator::validate_template_set(&self.templates)?;

        let Normalized { plan, warnings } = normalize_options(request, &tree)?;
        info!(
            directory = %plan.component_dir(),
            style = %plan.style,
            "Generating {}",
            plan.class_name
        );

        let rule = chain([
            materialize_template(&plan, &self.templates, self.renderer.as_ref())?,
            add_style_dependencies(&plan),
            export_to_barrel(&plan),
            add_routing_dependencies(&plan),
            format_files(&plan, Arc::clone(&self.formatter)),
        ]);
        rule.apply(&mut tree)?;

        let install_required = tree
            .action(&RelativePath::lenient(PACKAGE_JSON))
            .is_some();

        Ok(GenerationOutcome {
            tree,
            plan,
            warnings,
            install_required,
        })
    }

    /// Write every created or updated file under `root`.
    fn commit(&self, root: &Path, tree: &ProjectTree) -> FragmentResult<()> {
        let changes = tree.changes();
        for change in &changes {
            let path = root.join(change.path.as_str());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &change.content).inspect_err(|e| {
                warn!(error = %e, path = %path.display(), "Write failed");
            })?;
        }
        info!(files = changes.len(), "Wrote changes");
        Ok(())
    }
}
