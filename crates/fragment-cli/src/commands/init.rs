//! `fragment init`: create a default configuration file and, optionally,
//! an editable copy of the built-in templates.

use std::path::{Path, PathBuf};

use tracing::info;

use fragment_adapters::template_loader::export_builtin;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG)
    } else {
        AppConfig::config_path()
    };

    let mut config = AppConfig::default();
    if let Some(dir) = &args.export_templates {
        let written = export_builtin(dir, args.force)?;
        for path in &written {
            output.print(&format!("CREATE {}", path.display()))?;
        }
        if written.is_empty() {
            output.warning(&format!(
                "Templates already present in {} (use --force to overwrite)",
                dir.display()
            ))?;
        }
        config.templates.local_path = Some(dir.clone());
    }

    if config_path.exists() && !args.force && !confirm_overwrite(&config_path)? {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_config(&config_path, &config)?;
    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;
    Ok(())
}

fn write_config(path: &Path, config: &AppConfig) -> CliResult<()> {
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

/// Ask before replacing an existing file. Only prompts on a terminal.
#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }
    let overwrite = dialoguer::Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "Failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })?;
    if overwrite {
        Ok(true)
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path) -> CliResult<bool> {
    Ok(false)
}
