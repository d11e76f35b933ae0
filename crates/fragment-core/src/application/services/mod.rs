//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a component".

pub mod generator_service;

pub use generator_service::{DEFAULT_IGNORE, GenerationOutcome, GeneratorService};
