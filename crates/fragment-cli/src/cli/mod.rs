//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fragment",
    bin_name = "fragment",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{269b} React component generator for Nx-style workspaces",
    long_about = "Fragment adds React components to the projects of an Nx-style \
                  monorepo: component, stylesheet and spec files, styling \
                  dependencies and barrel exports.",
    after_help = "EXAMPLES:\n\
        \x20 fragment component my-button --project ui\n\
        \x20 fragment component foo-bar -p ui --style @emotion/styled --export\n\
        \x20 fragment styles\n\
        \x20 fragment completions bash > /usr/share/bash-completion/completions/fragment",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a React component inside a workspace project.
    #[command(
        visible_alias = "c",
        about = "Generate a React component",
        after_help = "EXAMPLES:\n\
            \x20 fragment component my-button --project ui\n\
            \x20 fragment component FooBar -p ui --style scss --directory forms\n\
            \x20 fragment component nav -p web --routing --dry-run"
    )]
    Component(ComponentArgs),

    /// List the supported styles.
    #[command(
        visible_alias = "ls",
        about = "List supported styles and the packages they add",
        after_help = "EXAMPLES:\n\
            \x20 fragment styles\n\
            \x20 fragment styles --format json"
    )]
    Styles(StylesArgs),

    /// Initialise a Fragment configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fragment init                          # default location\n\
            \x20 fragment init --local                  # .fragment.toml in CWD\n\
            \x20 fragment init --export-templates tpl   # copy built-in templates"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fragment completions bash > ~/.local/share/bash-completion/completions/fragment\n\
            \x20 fragment completions zsh  > ~/.zfunc/_fragment\n\
            \x20 fragment completions fish > ~/.config/fish/completions/fragment.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Fragment configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fragment config get defaults.style\n\
            \x20 fragment config set defaults.style scss\n\
            \x20 fragment config list"
    )]
    Config(ConfigCommands),
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `fragment component`.
#[derive(Debug, Clone, Args)]
pub struct ComponentArgs {
    /// Component name, in any casing (`foo-bar`, `FooBar`, `foo_bar`).
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    /// Destination project as declared in `workspace.json`.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "PROJECT",
        help = "Project to add the component to [default: defaults.project]"
    )]
    pub project: Option<String>,

    /// Styling choice.
    #[arg(
        short = 's',
        long = "style",
        value_name = "STYLE",
        help = "css, scss, less, styl, styled-components, @emotion/styled or none"
    )]
    pub style: Option<String>,

    /// Subfolder under the project's `lib/` or `app/` folder.
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Directory to create the component in"
    )]
    pub directory: Option<String>,

    /// Do not wrap the files in a folder named after the component.
    #[arg(long = "flat", help = "Create files without a component folder")]
    pub flat: bool,

    #[arg(long = "skip-tests", help = "Do not create a spec file")]
    pub skip_tests: bool,

    /// Re-export the component from the project's barrel (libraries only).
    #[arg(short = 'e', long = "export", help = "Export from the project index")]
    pub export: bool,

    #[arg(
        short = 'P',
        long = "pascal-case-files",
        help = "Use PascalCase file names"
    )]
    pub pascal_case_files: bool,

    #[arg(long = "js", help = "Generate JavaScript instead of TypeScript")]
    pub js: bool,

    #[arg(long = "routing", help = "Add react-router-dom to the component")]
    pub routing: bool,

    #[arg(long = "skip-format", help = "Leave generated files unformatted")]
    pub skip_format: bool,

    /// Report the changes without writing anything.
    #[arg(long = "dry-run", help = "Show what would change without writing")]
    pub dry_run: bool,

    /// Workspace root; defaults to the current directory.
    #[arg(
        short = 'w',
        long = "workspace",
        value_name = "DIR",
        help = "Workspace root directory"
    )]
    pub workspace: Option<PathBuf>,

    /// Directory holding a `template.toml` that replaces the built-in set.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "FRAGMENT_TEMPLATES_DIR",
        help = "Custom template directory"
    )]
    pub templates: Option<PathBuf>,
}

// ── styles ────────────────────────────────────────────────────────────────────

/// Arguments for `fragment styles`.
#[derive(Debug, Args)]
pub struct StylesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `styles` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One style per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fragment init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.fragment.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,

    /// Also copy the built-in templates into DIR for customisation.
    #[arg(
        long = "export-templates",
        value_name = "DIR",
        help = "Copy the built-in templates into DIR"
    )]
    pub export_templates: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fragment completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fragment config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_component_command() {
        let cli = Cli::parse_from([
            "fragment",
            "component",
            "foo-bar",
            "--project",
            "ui",
            "--style",
            "@emotion/styled",
            "--export",
        ]);
        let Commands::Component(args) = cli.command else {
            panic!("expected Component command");
        };
        assert_eq!(args.name, "foo-bar");
        assert_eq!(args.project.as_deref(), Some("ui"));
        assert_eq!(args.style.as_deref(), Some("@emotion/styled"));
        assert!(args.export);
        assert!(!args.flat);
    }

    #[test]
    fn component_alias_and_short_flags() {
        let cli = Cli::parse_from(["fragment", "c", "nav", "-p", "web", "-d", "menus", "-P"]);
        let Commands::Component(args) = cli.command else {
            panic!("expected Component command");
        };
        assert_eq!(args.directory.as_deref(), Some("menus"));
        assert!(args.pascal_case_files);
    }

    #[test]
    fn style_is_free_text() {
        // Validation happens in core so the error lists every valid style.
        let cli = Cli::try_parse_from(["fragment", "component", "x", "--style", "sass"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn styles_format_parses() {
        let cli = Cli::parse_from(["fragment", "styles", "--format", "csv"]);
        assert!(matches!(
            cli.command,
            Commands::Styles(StylesArgs {
                format: ListFormat::Csv
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["fragment", "--quiet", "--verbose", "styles"]);
        assert!(result.is_err());
    }
}
