//! Implementation of the `fragment styles` command.

use serde::Serialize;

use fragment_core::domain::{
    Style,
    styles::{DependencyEntries, dependencies_for},
};

use crate::{
    cli::{ListFormat, StylesArgs},
    error::CliResult,
    output::OutputManager,
};

/// One row of the styles listing.
#[derive(Debug, Serialize)]
struct StyleRow {
    style: &'static str,
    kind: &'static str,
    dependencies: Vec<String>,
    dev_dependencies: Vec<String>,
}

fn rows() -> Vec<StyleRow> {
    Style::ALL
        .into_iter()
        .map(|style| {
            let deps = dependencies_for(style);
            StyleRow {
                style: style.as_str(),
                kind: if style.is_css_in_js() {
                    "css-in-js"
                } else if style.has_styles() {
                    "stylesheet"
                } else {
                    "none"
                },
                dependencies: deps.map(|d| pinned(d.dependencies)).unwrap_or_default(),
                dev_dependencies: deps.map(|d| pinned(d.dev_dependencies)).unwrap_or_default(),
            }
        })
        .collect()
}

/// `name@version` for each entry.
fn pinned(entries: DependencyEntries) -> Vec<String> {
    entries
        .iter()
        .map(|(name, version)| format!("{name}@{version}"))
        .collect()
}

pub fn execute(args: StylesArgs, output: OutputManager) -> CliResult<()> {
    let rows = rows();

    match args.format {
        ListFormat::Table => {
            output.header("Supported styles:")?;
            for row in &rows {
                let mut packages = row.dependencies.clone();
                packages.extend(row.dev_dependencies.iter().map(|d| format!("{d} (dev)")));
                let packages = if packages.is_empty() {
                    "-".to_string()
                } else {
                    packages.join(", ")
                };
                output.print(&format!(
                    "  {:<18} {:<11} {packages}",
                    row.style, row.kind
                ))?;
            }
        }
        // JSON and CSV bypass quiet mode: they are requested explicitly.
        ListFormat::Json => output.json(&rows)?,
        ListFormat::List => {
            for row in &rows {
                println!("{}", row.style);
            }
        }
        ListFormat::Csv => {
            println!("style,kind,dependencies,dev_dependencies");
            for row in &rows {
                println!(
                    "{},{},{},{}",
                    row.style,
                    row.kind,
                    row.dependencies.join(" "),
                    row.dev_dependencies.join(" ")
                );
            }
        }
    }

    Ok(())
}
