//! Domain value objects: Style, ProjectType.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO dependency data. The dependency table for CSS-in-JS
//! libraries lives in `styles.rs`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Style ─────────────────────────────────────────────────────────────────────

/// How a generated component is styled.
///
/// Plain stylesheet extensions produce a sibling stylesheet file; CSS-in-JS
/// libraries keep styles in the component module; `None` emits no styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "css")]
    Css,
    #[serde(rename = "scss")]
    Scss,
    #[serde(rename = "less")]
    Less,
    #[serde(rename = "styl")]
    Stylus,
    #[serde(rename = "styled-components")]
    StyledComponents,
    #[serde(rename = "@emotion/styled")]
    EmotionStyled,
    #[serde(rename = "none")]
    None,
}

impl Style {
    /// Every accepted style, in the order they are presented to users.
    pub const ALL: [Style; 7] = [
        Self::Css,
        Self::Scss,
        Self::Less,
        Self::Stylus,
        Self::StyledComponents,
        Self::EmotionStyled,
        Self::None,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Less => "less",
            Self::Stylus => "styl",
            Self::StyledComponents => "styled-components",
            Self::EmotionStyled => "@emotion/styled",
            Self::None => "none",
        }
    }

    /// String forms of [`Style::ALL`].
    pub fn valid_values() -> Vec<&'static str> {
        Self::ALL.iter().map(Style::as_str).collect()
    }

    /// `true` for libraries that author styles in component code.
    pub const fn is_css_in_js(&self) -> bool {
        matches!(self, Self::StyledComponents | Self::EmotionStyled)
    }

    /// The CSS-in-JS module this style imports, if any.
    pub const fn styled_module(&self) -> Option<&'static str> {
        if self.is_css_in_js() {
            Some(self.as_str())
        } else {
            None
        }
    }

    /// `false` only for [`Style::None`].
    pub const fn has_styles(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStyle {
                style: s.to_string(),
                valid: Self::valid_values(),
            })
    }
}

// ── ProjectType ───────────────────────────────────────────────────────────────

/// Declared type of a workspace project (`projectType` in `workspace.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    #[default]
    Library,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Library => "library",
        }
    }

    /// Folder under the source root that holds generated components.
    pub const fn base_dir(&self) -> &'static str {
        match self {
            Self::Application => "app",
            Self::Library => "lib",
        }
    }

    pub const fn is_application(&self) -> bool {
        matches!(self, Self::Application)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
