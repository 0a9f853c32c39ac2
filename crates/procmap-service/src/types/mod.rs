//! Data types shared across the procmap crates.

mod health;
mod process;

pub use health::{ServiceHealth, ServiceStatus};
pub use process::{ProcessEdge, ProcessNode, ProcessStep, ProcessStructure};
