#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod chat;
mod client;
mod config;
mod error;
mod service;

pub use crate::client::{OpenAiClient, TRACING_TARGET};
pub use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiConfig};
pub use crate::error::{Error, Result};
