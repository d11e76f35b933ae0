//! Built-in code formatter.
//!
//! Normalises whitespace in generated sources and pretty-prints JSON. It is
//! not a replacement for Prettier: token layout is never changed, only
//! trailing whitespace, blank-line runs and the final newline.

use tracing::trace;

use fragment_core::{
    application::{ApplicationError, ports::CodeFormatter},
    domain::RelativePath,
    error::FragmentResult,
};

/// Extensions treated as line-oriented source text.
const TEXT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "css", "scss", "less", "styl", "md",
];

/// Whitespace normaliser for the files a generation touches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatter;

impl BasicFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl CodeFormatter for BasicFormatter {
    fn format(&self, path: &RelativePath, content: &str) -> FragmentResult<Option<String>> {
        match path.extension() {
            Some("json") => format_json(path, content).map(Some),
            Some(ext) if TEXT_EXTENSIONS.contains(&ext) => Ok(Some(normalize_whitespace(content))),
            _ => {
                trace!(path = %path, "no formatter for file type");
                Ok(None)
            }
        }
    }
}

fn format_json(path: &RelativePath, content: &str) -> FragmentResult<String> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ApplicationError::FormattingFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    let mut out =
        serde_json::to_string_pretty(&value).map_err(|e| ApplicationError::FormattingFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    out.push('\n');
    Ok(out)
}

/// Strip trailing whitespace, collapse runs of blank lines to one, drop
/// leading blank lines and end with exactly one newline.
fn normalize_whitespace(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut pending_blank = false;

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
