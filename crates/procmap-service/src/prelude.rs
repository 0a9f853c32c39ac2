//! Commonly used items from procmap-service.
//!
//! # Usage
//!
//! ```rust,ignore
//! use procmap_service::prelude::*;
//! ```

pub use crate::completion::{
    CompletionDefaults, CompletionProvider, CompletionRequest, CompletionResponse,
    CompletionService,
};
pub use crate::extract::{DotSource, extract_dot, extract_steps, extract_structure};
pub use crate::prompt::{PromptTemplate, render_structure_prompt};
pub use crate::types::{ProcessEdge, ProcessNode, ProcessStep, ProcessStructure};
pub use crate::{Error, ErrorKind, Result};
