//! Style library dependency registry.
//!
//! Each CSS-in-JS library a component can be generated with is described
//! exactly once by a [`StyleLibraryDef`]. Lookups are O(n) scans over a
//! seven-entry table. Plain stylesheet extensions have no entry: they need
//! no package at runtime.
//!
//! # Adding a New Library
//!
//! 1. Add a variant to `Style` in `value_objects.rs`
//! 2. Add one [`StyleLibraryDef`] entry to [`STYLE_REGISTRY`]

use crate::domain::value_objects::Style;

// ── Versions ──────────────────────────────────────────────────────────────────

pub const STYLED_COMPONENTS_VERSION: &str = "5.0.1";
pub const TYPES_STYLED_COMPONENTS_VERSION: &str = "5.0.1";

pub const EMOTION_STYLED_VERSION: &str = "10.0.27";
pub const EMOTION_CORE_VERSION: &str = "10.0.27";

pub const REACT_ROUTER_DOM_VERSION: &str = "5.1.2";
pub const TYPES_REACT_ROUTER_DOM_VERSION: &str = "5.1.3";

// ── Definitions ───────────────────────────────────────────────────────────────

/// `(package, version)` pairs, in declaration order.
pub type DependencyEntries = &'static [(&'static str, &'static str)];

/// Runtime and development dependencies a feature pulls into `package.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageDependencies {
    pub dependencies: DependencyEntries,
    pub dev_dependencies: DependencyEntries,
}

impl PackageDependencies {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// Describes the packages one CSS-in-JS library requires.
#[derive(Debug, Clone, Copy)]
pub struct StyleLibraryDef {
    /// The style this definition describes.
    pub style: Style,

    /// Packages added to `dependencies` / `devDependencies`.
    pub packages: PackageDependencies,
}

/// Single source of truth for styling dependencies.
pub static STYLE_REGISTRY: &[StyleLibraryDef] = &[
    StyleLibraryDef {
        style: Style::StyledComponents,
        packages: PackageDependencies {
            dependencies: &[("styled-components", STYLED_COMPONENTS_VERSION)],
            dev_dependencies: &[(
                "@types/styled-components",
                TYPES_STYLED_COMPONENTS_VERSION,
            )],
        },
    },
    StyleLibraryDef {
        style: Style::EmotionStyled,
        packages: PackageDependencies {
            dependencies: &[
                ("@emotion/styled", EMOTION_STYLED_VERSION),
                ("@emotion/core", EMOTION_CORE_VERSION),
            ],
            dev_dependencies: &[],
        },
    },
];

/// Packages declared when a component is generated with routing.
pub static ROUTING_DEPENDENCIES: PackageDependencies = PackageDependencies {
    dependencies: &[("react-router-dom", REACT_ROUTER_DOM_VERSION)],
    dev_dependencies: &[("@types/react-router-dom", TYPES_REACT_ROUTER_DOM_VERSION)],
};

// ── Queries ───────────────────────────────────────────────────────────────────

/// Find the registry entry for a styling module name (e.g. `"@emotion/styled"`).
///
/// Returns `None` for plain stylesheets and unknown modules.
pub fn find_style_library(module: &str) -> Option<&'static StyleLibraryDef> {
    STYLE_REGISTRY.iter().find(|def| def.style.as_str() == module)
}

/// Dependencies for a style, or `None` when it needs no packages.
pub fn dependencies_for(style: Style) -> Option<PackageDependencies> {
    STYLE_REGISTRY
        .iter()
        .find(|def| def.style == style)
        .map(|def| def.packages)
}
