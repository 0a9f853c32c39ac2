//! Request types for HTTP handlers.

mod process;

pub use process::*;
