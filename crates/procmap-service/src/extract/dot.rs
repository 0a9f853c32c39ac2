//! Validated DOT source.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use super::{TRACING_TARGET, extract_dot_payload};
use crate::{Error, Result};

/// Keyword every accepted payload must start with.
const DIGRAPH: &str = "digraph";

/// DOT source that starts with the `digraph` keyword.
///
/// Only [`extract_dot`] constructs it. Nothing beyond the leading keyword is
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DotSource(String);

impl DotSource {
    /// Returns the DOT text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the DOT text.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for DotSource {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for DotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DotSource> for String {
    fn from(source: DotSource) -> Self {
        source.0
    }
}

fn starts_with_digraph(payload: &str) -> bool {
    payload
        .get(..DIGRAPH.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(DIGRAPH))
}

/// Extracts DOT source from a reply and checks the `digraph` prefix.
///
/// The comparison ignores ASCII case. A payload that does not start with the
/// keyword yields a validation error.
pub fn extract_dot(reply: &str) -> Result<DotSource> {
    let extracted = extract_dot_payload(reply);

    if !starts_with_digraph(extracted.payload) {
        tracing::warn!(
            target: TRACING_TARGET,
            strategy = extracted.strategy.as_ref(),
            payload_len = extracted.payload.len(),
            "Extracted payload is not a digraph"
        );

        return Err(Error::validation()
            .with_message("Generated output is not valid DOT: expected it to start with 'digraph'"));
    }

    Ok(DotSource(extracted.payload.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn fenced_reply_is_accepted() -> Result<()> {
        let dot = extract_dot("Sure!\n```dot\ndigraph G { a -> b; }\n```")?;
        assert_eq!(dot.as_str(), "digraph G { a -> b; }");
        Ok(())
    }

    #[test]
    fn keyword_check_ignores_case() -> Result<()> {
        let dot = extract_dot("DIGRAPH g {}")?;
        assert_eq!(dot.to_string(), "DIGRAPH g {}");
        Ok(())
    }

    #[test]
    fn undirected_graph_is_rejected() {
        let error = extract_dot("```dot\ngraph G { a -- b; }\n```").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValidationFailed);
    }

    #[test]
    fn prose_is_rejected() {
        let error = extract_dot("I cannot draw that.").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValidationFailed);
    }

    #[test]
    fn empty_reply_is_rejected() {
        assert!(extract_dot("").is_err());
    }

    #[test]
    fn multibyte_prefix_does_not_panic() {
        assert!(extract_dot("\u{00e9}\u{00e9}\u{00e9}\u{00e9}").is_err());
    }
}
