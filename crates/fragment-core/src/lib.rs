//! Fragment Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Fragment
//! component generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fragment-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GeneratorService, generation steps)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Render, Format)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fragment-adapters (Infrastructure)   │
//! │  (LocalFilesystem, TeraRenderer, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectTree, Style, PackageManifest)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fragment_core::prelude::*;
//!
//! # fn demo(service: GeneratorService) -> FragmentResult<()> {
//! let request = GenerationRequest::builder("foo-bar", "ui")
//!     .style("@emotion/styled")
//!     .export(true)
//!     .build();
//!
//! let outcome = service.run(&request, "./my-workspace".as_ref(), false)?;
//! for change in outcome.tree.changes() {
//!     println!("{} {}", change.action, change.path);
//! }
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationOutcome, GeneratorService,
        ports::{CodeFormatter, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        FileAction, FileChange, FileRole, GenerationRequest, NormalizedPlan, ProjectTree,
        RelativePath, RenderContext, Style, TemplateFile, TemplateSet,
    };
    pub use crate::error::{FragmentError, FragmentResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
