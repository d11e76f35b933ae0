//! Implementation of the `fragment component` command.
//!
//! Responsibility: merge CLI arguments with configured defaults into a
//! `GenerationRequest`, wire the adapters into a `GeneratorService`, and
//! report the change list. No generation logic lives here.

use serde::Serialize;
use tracing::{debug, info, instrument};

use fragment_adapters::{
    BasicFormatter, LocalFilesystem, TeraRenderer, builtin_templates::resolve_templates,
};
use fragment_core::{
    application::{GenerationOutcome, GeneratorService},
    domain::GenerationRequest,
};

use crate::{
    cli::{ComponentArgs, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `fragment component` command.
///
/// 1. Resolve the request from flags and `[defaults]`
/// 2. Pick the template set (`--templates`, config, or built-in)
/// 3. Run the generator against the workspace root
/// 4. Print the change list, warnings and an install hint
#[instrument(skip_all, fields(component = %args.name))]
pub fn execute(
    args: ComponentArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    let root = match &args.workspace {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory")?,
    };
    let templates_dir = args
        .templates
        .clone()
        .or_else(|| config.templates.local_path.clone());

    debug!(
        project = %request.project,
        style = %request.style,
        root = %root.display(),
        templates = ?templates_dir,
        "Request resolved"
    );

    let templates = resolve_templates(templates_dir.as_deref())?;
    let service = GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TeraRenderer::new()),
        Box::new(BasicFormatter::new()),
        templates,
    )
    .with_ignore(config.workspace.ignore.clone());

    let outcome = service.run(&request, &root, args.dry_run)?;
    info!(
        changes = outcome.tree.changes().len(),
        dry_run = args.dry_run,
        "Component generated"
    );

    if output.format() == OutputFormat::Json {
        output.json(&Report::new(&outcome, args.dry_run))?;
        return Ok(());
    }
    report(&outcome, args.dry_run, &global, &output)
}

/// Flags win; unset flags fall back to `[defaults]`.
fn build_request(args: &ComponentArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let defaults = &config.defaults;
    let project = args
        .project
        .clone()
        .or_else(|| defaults.project.clone())
        .ok_or_else(|| CliError::MissingProject {
            component: args.name.clone(),
        })?;
    let style = args.style.clone().unwrap_or_else(|| defaults.style.clone());

    Ok(GenerationRequest::builder(&args.name, project)
        .style(style)
        .directory(args.directory.clone())
        .flat(args.flat)
        .skip_tests(args.skip_tests)
        .export(args.export || defaults.export)
        .pascal_case_files(args.pascal_case_files || defaults.pascal_case_files)
        .js(args.js || defaults.js)
        .routing(args.routing)
        .skip_format(args.skip_format || defaults.skip_format)
        .build())
}

fn report(
    outcome: &GenerationOutcome,
    dry_run: bool,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    for warning in &outcome.warnings {
        output.warning(warning)?;
    }
    for change in outcome.changes() {
        output.change(change.action, change.path.as_str())?;
    }

    if dry_run {
        output.print("")?;
        output.info("Dry run: no files were written.")?;
        return Ok(());
    }

    output.success(&format!(
        "Component '{}' added to project '{}'",
        outcome.plan.class_name, outcome.plan.project
    ))?;
    if outcome.install_required && !global.quiet {
        output.info("package.json changed: run your package manager's install command.")?;
    }
    Ok(())
}

/// Machine-readable summary for `--output-format json`.
#[derive(Debug, Serialize)]
struct Report {
    component: String,
    project: String,
    directory: String,
    dry_run: bool,
    changes: Vec<ChangeEntry>,
    warnings: Vec<String>,
    install_required: bool,
}

#[derive(Debug, Serialize)]
struct ChangeEntry {
    action: &'static str,
    path: String,
}

impl Report {
    fn new(outcome: &GenerationOutcome, dry_run: bool) -> Self {
        Self {
            component: outcome.plan.class_name.clone(),
            project: outcome.plan.project.clone(),
            directory: outcome.plan.component_dir().to_string(),
            dry_run,
            changes: outcome
                .changes()
                .into_iter()
                .map(|c| ChangeEntry {
                    action: c.action.as_str(),
                    path: c.path.to_string(),
                })
                .collect(),
            warnings: outcome.warnings.clone(),
            install_required: outcome.install_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    fn args(extra: &[&str]) -> ComponentArgs {
        let mut argv = vec!["fragment", "component", "foo-bar"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Component(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn flags_are_copied_into_the_request() {
        let request = build_request(
            &args(&["-p", "ui", "--style", "scss", "--flat", "--routing"]),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(request.project, "ui");
        assert_eq!(request.style, "scss");
        assert!(request.flat);
        assert!(request.routing);
        assert!(!request.export);
    }

    #[test]
    fn defaults_fill_unset_flags() {
        let mut config = AppConfig::default();
        config.defaults.project = Some("ui".into());
        config.defaults.style = "styled-components".into();
        config.defaults.js = true;
        config.defaults.export = true;

        let request = build_request(&args(&[]), &config).unwrap();
        assert_eq!(request.project, "ui");
        assert_eq!(request.style, "styled-components");
        assert!(request.js);
        assert!(request.export);
    }

    #[test]
    fn flags_override_defaults() {
        let mut config = AppConfig::default();
        config.defaults.project = Some("ui".into());
        let request = build_request(&args(&["-p", "web", "-s", "none"]), &config).unwrap();
        assert_eq!(request.project, "web");
        assert_eq!(request.style, "none");
    }

    #[test]
    fn missing_project_is_reported() {
        let err = build_request(&args(&[]), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::MissingProject { .. }));
    }
}
