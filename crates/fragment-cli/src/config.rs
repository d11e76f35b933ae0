//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FRAGMENT__<SECTION>__<KEY>`, e.g.
//!    `FRAGMENT__DEFAULTS__STYLE=scss`
//! 3. Config file: `--config FILE`, else `.fragment.toml` in the current
//!    directory, else `config.toml` in the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use fragment_core::application::services::DEFAULT_IGNORE;

/// File name of a project-local configuration.
pub const LOCAL_CONFIG: &str = ".fragment.toml";

const ENV_PREFIX: &str = "FRAGMENT";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for `fragment component`.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Template settings.
    #[serde(default)]
    pub templates: TemplateConfig,
    /// Workspace scanning.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// The file this configuration was read from, if any.
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub style: String,
    pub project: Option<String>,
    pub pascal_case_files: bool,
    pub js: bool,
    pub skip_format: bool,
    pub export: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            style: "css".into(),
            project: None,
            pascal_case_files: false,
            js: false,
            skip_format: false,
            export: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory names skipped when snapshotting the workspace.
    pub ignore: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            templates: TemplateConfig::default(),
            workspace: WorkspaceConfig::default(),
            loaded_from: None,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it, the local and platform files are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => Some((path.clone(), true)),
            None => Self::discover().map(|path| (path, false)),
        };
        Self::load_from(file.as_ref().map(|(p, r)| (p.as_path(), *r)), true)
    }

    /// Build from defaults plus an optional `(file, required)` and,
    /// when `with_env` is set, `FRAGMENT__*` variables.
    pub fn load_from(file: Option<(&Path, bool)>, with_env: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to seed default configuration")?,
        );

        if let Some((path, required)) = file {
            debug!(path = %path.display(), required, "config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(required));
        }

        if with_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("workspace.ignore"),
            );
        }

        let mut config: Self = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration values")?;

        config.loaded_from = file.filter(|(p, _)| p.exists()).map(|(p, _)| p.to_path_buf());
        Ok(config)
    }

    /// `.fragment.toml` in the current directory wins over the global file.
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.is_file() {
            return Some(local);
        }
        Some(Self::config_path())
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.fragment.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "fragment", "fragment")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The file `config set` writes to.
    pub fn active_path(&self) -> PathBuf {
        self.loaded_from.clone().unwrap_or_else(Self::config_path)
    }
}
