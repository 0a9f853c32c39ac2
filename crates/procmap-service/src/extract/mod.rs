//! Payload extraction from free-form completion replies.
//!
//! Models wrap their answers in prose and Markdown fences. The functions here
//! recover the part the caller asked for:
//!
//! - [`extract_dot`] applies the ordered [`FenceStrategy`] list and checks the
//!   result is a directed graph.
//! - [`extract_steps`] and [`extract_structure`] locate the outermost JSON
//!   array or object with [`extract_json_fragment`] and decode it.

mod dot;
mod fence;
mod json;

pub use dot::{DotSource, extract_dot};
pub use fence::{Extracted, FenceStrategy, extract_dot_payload};
pub use json::{JsonShape, extract_json_fragment, extract_steps, extract_structure};

/// Tracing target for extraction.
pub const TRACING_TARGET: &str = "procmap_service::extract";
