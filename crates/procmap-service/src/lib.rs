#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod completion;
mod error;
pub mod extract;
#[doc(hidden)]
pub mod prelude;
pub mod prompt;
mod types;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use completion::MockProvider;
pub use completion::{
    CompletionDefaults, CompletionProvider, CompletionRequest, CompletionResponse,
    CompletionService, CompletionUsage,
};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use extract::{DotSource, FenceStrategy, JsonShape};
pub use prompt::PromptTemplate;
pub use types::{
    ProcessEdge, ProcessNode, ProcessStep, ProcessStructure, ServiceHealth, ServiceStatus,
};
