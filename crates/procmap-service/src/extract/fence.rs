//! Code fence strategies for DOT replies.

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::TRACING_TARGET;

/// Opening marker of a DOT-tagged code block.
const DOT_FENCE: &str = "```dot";

/// Any code fence.
const FENCE: &str = "```";

/// Language tag some models leave at the start of an untagged block.
const DOT_TAG: &str = "dot";

/// Ordered strategies for locating DOT source in a reply.
///
/// Variants are declared in the order they are tried. The first strategy
/// whose marker occurs in the reply wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FenceStrategy {
    /// Text between the first ```` ```dot ```` and the next fence.
    DotFence,
    /// Text between the first two fences, minus a stray `dot` tag.
    GenericFence,
    /// The whole reply.
    WholeReply,
}

/// A payload together with the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Strategy that matched.
    pub strategy: FenceStrategy,
    /// Trimmed payload text.
    pub payload: &'a str,
}

impl FenceStrategy {
    /// Applies this strategy alone, returning `None` if its marker is absent.
    pub fn apply(self, reply: &str) -> Option<&str> {
        match self {
            Self::DotFence => {
                let (_, rest) = reply.split_once(DOT_FENCE)?;
                let body = rest.split(FENCE).next().unwrap_or(rest);
                Some(body.trim())
            }
            Self::GenericFence => {
                let (_, rest) = reply.split_once(FENCE)?;
                let body = rest.split(FENCE).next().unwrap_or(rest).trim();
                Some(strip_dot_tag(body))
            }
            Self::WholeReply => Some(reply.trim()),
        }
    }
}

/// Removes a leading `dot` token when it stands on its own.
fn strip_dot_tag(body: &str) -> &str {
    match body.strip_prefix(DOT_TAG) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => body,
    }
}

/// Runs the strategies in order and returns the first match.
pub fn extract_dot_payload(reply: &str) -> Extracted<'_> {
    let extracted = FenceStrategy::iter()
        .find_map(|strategy| {
            strategy
                .apply(reply)
                .map(|payload| Extracted { strategy, payload })
        })
        .unwrap_or(Extracted {
            strategy: FenceStrategy::WholeReply,
            payload: reply.trim(),
        });

    tracing::trace!(
        target: TRACING_TARGET,
        strategy = extracted.strategy.as_ref(),
        payload_len = extracted.payload.len(),
        "Located DOT payload"
    );

    extracted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_fence_takes_first_tagged_block() {
        let reply = "Here you go:\n```dot\ndigraph A { a -> b; }\n```\nand\n```dot\ndigraph B {}\n```";
        let extracted = extract_dot_payload(reply);

        assert_eq!(extracted.strategy, FenceStrategy::DotFence);
        assert_eq!(extracted.payload, "digraph A { a -> b; }");
    }

    #[test]
    fn dot_fence_without_closing_fence_runs_to_end() {
        let extracted = extract_dot_payload("```dot\ndigraph G {}\n");
        assert_eq!(extracted.payload, "digraph G {}");
    }

    #[test]
    fn generic_fence_strips_stray_dot_tag() {
        let reply = "``` dot\ndigraph G { x; }\n```";
        let extracted = extract_dot_payload(reply);

        assert_eq!(extracted.strategy, FenceStrategy::GenericFence);
        assert_eq!(extracted.payload, "digraph G { x; }");
    }

    #[test]
    fn generic_fence_keeps_words_starting_with_dot() {
        let extracted = extract_dot_payload("```\ndotted line\n```");
        assert_eq!(extracted.payload, "dotted line");
    }

    #[test]
    fn generic_fence_without_tag() {
        let extracted = extract_dot_payload("```\ndigraph G {}\n```");
        assert_eq!(extracted.strategy, FenceStrategy::GenericFence);
        assert_eq!(extracted.payload, "digraph G {}");
    }

    #[test]
    fn whole_reply_is_trimmed() {
        let extracted = extract_dot_payload("\n  digraph G { a -> b; }  \n");
        assert_eq!(extracted.strategy, FenceStrategy::WholeReply);
        assert_eq!(extracted.payload, "digraph G { a -> b; }");
    }
}
