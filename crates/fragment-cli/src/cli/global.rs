//! Flags shared by every `fragment` subcommand.
//!
//! They control what the run prints (log level, color, report format) and
//! which config file seeds the component defaults.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more of the generation pipeline (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        long_help = "Log more of the generation pipeline to stderr.
    (none)  warnings, e.g. --export on an application
    -v      each step: snapshot loaded, files rendered, dependencies declared
    -vv     skipped steps and per-file formatting
    -vvv    everything, including files left unformatted

RUST_LOG overrides this flag."
    )]
    pub verbose: u8,

    /// Print errors only; no change list or install hint
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colors (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read defaults from this TOML file instead of .fragment.toml or the user config
    #[arg(short, long, global = true, value_name = "FILE", env = "FRAGMENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to render the change report; `auto` defers to `output.format` in config
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    /// CREATE/UPDATE lines with colors
    Human,
    /// CREATE/UPDATE lines without colors
    Plain,
    /// One JSON report on stdout, JSON log events on stderr
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value; unknown values mean `Auto`.
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value, true).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn config_values_are_case_insensitive() {
        assert_eq!(OutputFormat::from_config("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("plain"), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_config("fancy"), OutputFormat::Auto);
    }

    #[test]
    fn verbosity_counts_and_conflicts_with_quiet() {
        let parsed = Harness::try_parse_from(["fragment", "-vv"]).unwrap();
        assert_eq!(parsed.global.verbose, 2);
        assert!(Harness::try_parse_from(["fragment", "-v", "--quiet"]).is_err());
    }

    #[test]
    fn output_format_flag() {
        let parsed = Harness::try_parse_from(["fragment", "--output-format", "json"]).unwrap();
        assert_eq!(parsed.global.output_format, OutputFormat::Json);
    }
}
