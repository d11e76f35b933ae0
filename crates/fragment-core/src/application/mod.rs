//! Application layer for Fragment.
//!
//! This layer contains:
//! - **Rules**: Deferred tree transformations and their composition
//! - **Steps**: The generation steps (normalize, materialize, dependencies,
//!   barrel export, format), each producing a rule
//! - **Services**: Use case orchestration (`GeneratorService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer; request semantics
//! such as casing and style tables live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod rules;
pub mod services;
pub mod steps;

// Re-export main services
pub use services::{GenerationOutcome, GeneratorService};

// Re-export port traits (for adapter implementation)
pub use ports::{CodeFormatter, Filesystem, TemplateRenderer};

pub use error::ApplicationError;
pub use rules::{Rule, chain, noop};
