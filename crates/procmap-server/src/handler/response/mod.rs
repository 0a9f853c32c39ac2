//! Response types for HTTP handlers.

mod errors;
mod monitors;
mod process;

pub use errors::ErrorResponse;
pub use monitors::HealthResponse;
pub use process::{DotResponse, StepsResponse, StructureResponse};
