//! JSON fragment extraction for step and structure replies.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use strum::AsRefStr;

use super::TRACING_TARGET;
use crate::types::{ProcessStep, ProcessStructure};
use crate::{Error, Result};

static ARRAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is valid"));

static OBJECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("object pattern is valid"));

/// The top-level JSON value a reply is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum JsonShape {
    /// A `[...]` array.
    Array,
    /// A `{...}` object.
    Object,
}

impl JsonShape {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Array => &ARRAY_PATTERN,
            Self::Object => &OBJECT_PATTERN,
        }
    }
}

/// Returns the span from the first opening to the last closing bracket of
/// `shape`, or `None` if there is no such span.
///
/// The match is greedy: prose between two separate JSON values ends up in the
/// fragment and makes decoding fail.
pub fn extract_json_fragment(reply: &str, shape: JsonShape) -> Option<&str> {
    shape.pattern().find(reply).map(|m| m.as_str())
}

fn decode_fragment<T: DeserializeOwned>(reply: &str, shape: JsonShape) -> Result<Option<T>> {
    let Some(fragment) = extract_json_fragment(reply, shape) else {
        tracing::debug!(
            target: TRACING_TARGET,
            shape = shape.as_ref(),
            reply_len = reply.len(),
            "No JSON fragment in reply"
        );
        return Ok(None);
    };

    serde_json::from_str(fragment).map(Some).map_err(|err| {
        tracing::warn!(
            target: TRACING_TARGET,
            shape = shape.as_ref(),
            fragment_len = fragment.len(),
            error = %err,
            "JSON fragment could not be decoded"
        );
        Error::from(err)
    })
}

/// Decodes the step list from a reply.
///
/// A reply without any `[...]` span yields an empty list.
pub fn extract_steps(reply: &str) -> Result<Vec<ProcessStep>> {
    Ok(decode_fragment(reply, JsonShape::Array)?.unwrap_or_default())
}

/// Decodes the node/edge structure from a reply.
///
/// A reply without any `{...}` span yields [`ProcessStructure::default`].
pub fn extract_structure(reply: &str) -> Result<ProcessStructure> {
    Ok(decode_fragment(reply, JsonShape::Object)?.unwrap_or_default())
}
