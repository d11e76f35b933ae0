//! Generation steps.
//!
//! Each step inspects the [`NormalizedPlan`](crate::domain::NormalizedPlan)
//! and returns a [`Rule`](crate::application::Rule): a no-op when the
//! plan does not call for it, a transform otherwise.

pub mod barrel;
pub mod dependencies;
pub mod format;
pub mod materialize;
pub mod normalize;

pub use barrel::export_to_barrel;
pub use dependencies::{add_routing_dependencies, add_style_dependencies};
pub use format::format_files;
pub use materialize::materialize_template;
pub use normalize::{EXPORT_ON_APPLICATION_WARNING, Normalized, normalize_options};
