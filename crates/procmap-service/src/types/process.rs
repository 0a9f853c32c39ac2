//! Process steps and graph structures recovered from completion replies.

use serde::{Deserialize, Serialize};

/// Node type assigned when the model omits one.
const DEFAULT_NODE_TYPE: &str = "process";

fn default_node_type() -> String {
    DEFAULT_NODE_TYPE.to_owned()
}

/// A single step of a process, as listed by the step extraction prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ProcessStep {
    /// Short summary of what happens in this step.
    pub description: String,
    /// The Responsible role, if the text names one.
    #[serde(default)]
    pub role: Option<String>,
    /// Flowchart node kind (`start`, `end`, `process`, `decision`, ...).
    #[serde(default = "default_node_type")]
    pub node_type: String,
}

/// A node of a process graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ProcessNode {
    /// Identifier referenced by edges.
    pub id: String,
    /// Short summary used as the node label.
    pub description: String,
    /// The Responsible role, if any.
    #[serde(default)]
    pub role: Option<String>,
    /// Flowchart node kind.
    #[serde(default = "default_node_type")]
    pub node_type: String,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ProcessEdge {
    /// Identifier of the source node.
    pub from: String,
    /// Identifier of the target node.
    pub to: String,
    /// Branch label, only set on decision outcomes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A process graph: nodes, edges and an optional title.
///
/// The default value is the empty graph, which is what extraction yields when
/// the reply carries no JSON object at all.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ProcessStructure {
    /// Diagram title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Graph nodes.
    #[serde(default)]
    pub nodes: Vec<ProcessNode>,
    /// Graph edges.
    #[serde(default)]
    pub edges: Vec<ProcessEdge>,
}

impl ProcessNode {
    /// Creates a node of the default `process` kind.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            role: None,
            node_type: default_node_type(),
        }
    }

    /// Sets the Responsible role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the node kind.
    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }
}

impl ProcessEdge {
    /// Creates an unlabeled edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    /// Sets the branch label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl ProcessStructure {
    /// Creates a structure from nodes and edges.
    pub fn new(nodes: Vec<ProcessNode>, edges: Vec<ProcessEdge>) -> Self {
        Self {
            title: None,
            nodes,
            edges,
        }
    }

    /// Sets the diagram title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns true if the structure has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn step_defaults_node_type() -> serde_json::Result<()> {
        let step: ProcessStep = serde_json::from_value(json!({ "description": "Review" }))?;
        assert_eq!(step.node_type, "process");
        assert_eq!(step.role, None);
        Ok(())
    }

    #[test]
    fn step_requires_description() {
        let step = serde_json::from_value::<ProcessStep>(json!({ "role": "Clerk" }));
        assert!(step.is_err());
    }

    #[test]
    fn empty_structure_serializes_without_title() -> serde_json::Result<()> {
        let value = serde_json::to_value(ProcessStructure::default())?;
        assert_eq!(value, json!({ "nodes": [], "edges": [] }));
        Ok(())
    }

    #[test]
    fn edge_label_is_optional() -> serde_json::Result<()> {
        let edge: ProcessEdge = serde_json::from_value(json!({ "from": "a", "to": "b" }))?;
        assert_eq!(edge, ProcessEdge::new("a", "b"));

        let labeled = serde_json::to_value(ProcessEdge::new("a", "b").with_label("Yes"))?;
        assert_eq!(labeled, json!({ "from": "a", "to": "b", "label": "Yes" }));
        Ok(())
    }
}
