//! Identifier casing helpers.
//!
//! A raw component name such as `"foo-bar"` or `"FooBar"` is turned into the
//! forms the generated code needs:
//!
//! | Form          | `"foo-bar"` | `"FooBar"` | `"my_widget.item"` |
//! |---------------|-------------|------------|--------------------|
//! | class name    | `FooBar`    | `FooBar`   | `MyWidgetItem`     |
//! | property name | `fooBar`    | `fooBar`   | `myWidgetItem`     |
//! | file name     | `foo-bar`   | `foo-bar`  | `my-widget.item`   |

use serde::Serialize;

/// All casing variants derived from one raw name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Names {
    pub name: String,
    pub class_name: String,
    pub property_name: String,
    pub file_name: String,
}

impl Names {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            class_name: to_class_name(name),
            property_name: to_property_name(name),
            file_name: to_file_name(name),
        }
    }
}

/// PascalCase identifier: `foo-bar` → `FooBar`.
pub fn to_class_name(s: &str) -> String {
    capitalize(&to_property_name(s))
}

/// camelCase identifier: `foo-bar` → `fooBar`.
///
/// Runs of `-`, `_`, `.` and whitespace are dropped and the character that
/// follows them is uppercased.
pub fn to_property_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;

    for c in s.chars() {
        if is_separator(c) {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    let first = out.chars().next();
    match first {
        Some(first) if first.is_uppercase() => first
            .to_lowercase()
            .chain(out[first.len_utf8()..].chars())
            .collect(),
        _ => out,
    }
}

/// kebab-case file name: `FooBar` → `foo-bar`, `foo_bar` → `foo-bar`.
///
/// A boundary is inserted between a lowercase letter or digit and a
/// following uppercase letter; spaces and underscores become hyphens.
/// Dots are kept.
pub fn to_file_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prev {
            if (p.is_ascii_lowercase() || p.is_ascii_digit()) && c.is_ascii_uppercase() {
                out.push('-');
            }
        }
        match c {
            ' ' | '_' => out.push('-'),
            _ => out.extend(c.to_lowercase()),
        }
        prev = Some(c);
    }

    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.') || c.is_whitespace()
}
